use std::hash::Hash;

use siphasher::sip128::{Hasher128, SipHasher13};

use crate::combine::fold128;

/// A value with a stable, content-determined fingerprint.
///
/// Both methods must be pure functions of the value's logical content:
/// independent of memory addresses, and of insertion order in collections
/// where order is not semantically significant. Two logically equal values
/// must produce equal fingerprints across calls, threads, and processes.
///
/// `hash64` defaults to folding `hash128` down with [`fold128`]; types that
/// carry a native 64-bit fingerprint may override it.
pub trait StableHash {
    /// 128-bit fingerprint of the value's logical content.
    fn hash128(&self) -> u128;

    /// 64-bit fingerprint of the value's logical content.
    #[inline]
    fn hash64(&self) -> u64 {
        fold128(self.hash128())
    }
}

/// Fingerprint a single value.
///
/// Delegates to the value's [`StableHash`] capability verbatim; this layer
/// adds no transformation and exists to give scalar and sequence hashing a
/// uniform call-site.
#[inline]
pub fn scalar_hash128<T: StableHash + ?Sized>(value: &T) -> u128 {
    value.hash128()
}

/// 64-bit companion of [`scalar_hash128`].
#[inline]
pub fn scalar_hash64<T: StableHash + ?Sized>(value: &T) -> u64 {
    value.hash64()
}

/// Produce a 128-bit hash of any std-hashable value.
#[inline]
pub fn hash128_of<T: Hash + ?Sized>(value: &T) -> u128 {
    let mut state = SipHasher13::new();
    value.hash(&mut state);
    state.finish128().as_u128()
}

/// Produce a 64-bit hash of any std-hashable value.
#[inline]
pub fn hash64_of<T: Hash + ?Sized>(value: &T) -> u64 {
    fold128(hash128_of(value))
}

impl<T: StableHash + ?Sized> StableHash for &T {
    #[inline]
    fn hash128(&self) -> u128 {
        (**self).hash128()
    }

    #[inline]
    fn hash64(&self) -> u64 {
        (**self).hash64()
    }
}

macro_rules! stable_hash_via_std {
    ($($ty:ty),* $(,)?) => {
        $(impl StableHash for $ty {
            #[inline]
            fn hash128(&self) -> u128 {
                hash128_of(self)
            }
        })*
    };
}

stable_hash_via_std! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, str, String,
}

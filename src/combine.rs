//! 128-bit mixing primitives.

/// Multiplication constant from CityHash's `Hash128to64`.
const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

/// Mix two 64-bit words into one.
///
/// This is the `Hash128to64` multiply-xor-shift construction. It is
/// deliberately asymmetric in its arguments.
#[inline]
fn mix64(u: u64, v: u64) -> u64 {
    let mut a = (u ^ v).wrapping_mul(K_MUL);
    a ^= a >> 47;
    let mut b = (v ^ a).wrapping_mul(K_MUL);
    b ^= b >> 47;
    b.wrapping_mul(K_MUL)
}

/// Combine two 128-bit hashes into one.
///
/// Deterministic and non-commutative: `combine128(a, b)` differs from
/// `combine128(b, a)` in general. The asymmetry is intentional, it is what
/// makes the left-to-right sequence fold sensitive to element order.
#[inline]
pub fn combine128(a: u128, b: u128) -> u128 {
    let hi = mix64((a >> 64) as u64, (b >> 64) as u64);
    let lo = mix64(a as u64, b as u64);
    (u128::from(hi) << 64) | u128::from(lo)
}

/// Derive a 64-bit hash from a 128-bit one.
///
/// Both halves pass through a further mixing step. Plain truncation of a
/// 128-bit value can be statistically weaker than re-mixing, so this is the
/// only sanctioned 128 to 64 conversion in this crate.
#[inline]
pub fn fold128(h: u128) -> u64 {
    mix64((h >> 64) as u64, h as u64)
}

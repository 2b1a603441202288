use crate::combine::{combine128, fold128};
use crate::scalar::{StableHash, scalar_hash128};

/// Order-sensitive 128-bit fingerprint of a sequence.
///
/// The accumulator starts from the hash of the sequence length, hashed as an
/// ordinary scalar. Seeding with the length keeps sequences of different
/// lengths apart even when a shared prefix hashes identically, and gives the
/// empty sequence a fixed, non-trivial fingerprint instead of an identity
/// element. Elements are then folded left to right through [`combine128`],
/// so permutations of the same elements produce different fingerprints.
///
/// The empty sequence hashes to a reproducible constant; callers must treat
/// it as a regular output, not a marker for "no data".
pub fn sequence_hash128<T: StableHash>(seq: &[T]) -> u128 {
    let mut acc = scalar_hash128(&(seq.len() as u64));
    for x in seq {
        acc = combine128(acc, x.hash128());
    }
    acc
}

/// 64-bit form of [`sequence_hash128`].
///
/// Uses the same 128 to 64 derivation as scalar hashing, never a raw
/// truncation of the accumulator.
pub fn sequence_hash64<T: StableHash>(seq: &[T]) -> u64 {
    fold128(sequence_hash128(seq))
}

// Sequences are themselves hashable values, so nested ordered collections
// fingerprint recursively.
impl<T: StableHash> StableHash for [T] {
    #[inline]
    fn hash128(&self) -> u128 {
        sequence_hash128(self)
    }
}

impl<T: StableHash> StableHash for Vec<T> {
    #[inline]
    fn hash128(&self) -> u128 {
        sequence_hash128(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::scalar_hash64;

    #[test]
    fn matches_seeded_fold_recurrence() {
        let seq = [11u64, 22, 33];
        let h1 = scalar_hash128(&11u64);
        let h2 = scalar_hash128(&22u64);
        let h3 = scalar_hash128(&33u64);

        let mut expected = scalar_hash128(&3u64);
        expected = combine128(expected, h1);
        expected = combine128(expected, h2);
        expected = combine128(expected, h3);

        assert_eq!(sequence_hash128(&seq), expected);
    }

    #[test]
    fn empty_sequence_is_length_zero_hash() {
        let empty: [u64; 0] = [];
        assert_eq!(sequence_hash128(&empty), scalar_hash128(&0u64));
        assert_eq!(sequence_hash64(&empty), scalar_hash64(&0u64));
    }

    #[test]
    fn length_sensitive() {
        let h0 = sequence_hash128::<u64>(&[]);
        let h1 = sequence_hash128(&[5u64]);
        let h2 = sequence_hash128(&[5u64, 5]);
        assert_ne!(h0, h1);
        assert_ne!(h1, h2);
        assert_ne!(h0, h2);
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(sequence_hash128(&[1u64, 2]), sequence_hash128(&[2u64, 1]));
        assert_ne!(
            sequence_hash128(&["a", "b", "c"]),
            sequence_hash128(&["c", "b", "a"]),
        );
    }

    #[test]
    fn single_element_differs_from_scalar() {
        // A one-element sequence is not the same thing as its element.
        assert_ne!(sequence_hash128(&[7u64]), scalar_hash128(&7u64));
    }

    #[test]
    fn nested_sequences_hash() {
        let nested = vec![vec![1u64, 2], vec![3u64]];
        let flat = vec![vec![1u64, 2, 3]];
        assert_ne!(scalar_hash128(&nested), scalar_hash128(&flat));
    }
}

//! Deterministic fingerprinting.
//!
//! Produces stable 64-bit and 128-bit fingerprints for values and for ordered
//! sequences of values, plus a precision-safe way to turn a probability into
//! a 64-bit sampling cutoff. All operations are pure functions of logical
//! content: the same input yields the same fingerprint in every call, thread,
//! and process.
//!
//! ```
//! use stablehash::{proportion_cutoff, scalar_hash64, sequence_hash128};
//!
//! // Keep roughly 10% of records, decided per record but reproducibly.
//! let cutoff = proportion_cutoff(0.1);
//! let keep = scalar_hash64("record-421") < cutoff;
//! assert_eq!(keep, scalar_hash64("record-421") < cutoff);
//!
//! // Sequence fingerprints are order- and length-sensitive.
//! assert_ne!(sequence_hash128(&[1u64, 2]), sequence_hash128(&[2u64, 1]));
//! ```

mod combine;
mod proportion;
mod scalar;
mod sequence;

pub use crate::combine::{combine128, fold128};
pub use crate::proportion::proportion_cutoff;
pub use crate::scalar::{StableHash, hash64_of, hash128_of, scalar_hash64, scalar_hash128};
pub use crate::sequence::{sequence_hash64, sequence_hash128};

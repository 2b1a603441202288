/// Convert a proportion in `[0.0, 1.0]` into a 64-bit sampling cutoff.
///
/// Comparing a uniformly distributed 64-bit hash against the cutoff yields
/// the requested proportion of hits:
///
/// ```
/// use stablehash::{proportion_cutoff, scalar_hash64};
///
/// let cutoff = proportion_cutoff(0.25);
/// let sampled = scalar_hash64(&"some-record") < cutoff;
/// ```
///
/// The naive `(proportion * 2^64) as u64` collapses many distinct thresholds
/// near 1.0 because a double carries only ~52 mantissa bits. Instead the
/// proportion is scaled into the lower half of the range, where the mantissa
/// fully resolves it, and the full range is recovered as the sum of two
/// clipped terms. The mapping is monotone and saturates exactly: 0.0 maps to
/// 0 and 1.0 maps to `u64::MAX`.
///
/// # Panics
/// Panics if `proportion` lies outside `[0.0, 1.0]`. An out-of-range
/// proportion is a programming error on the caller's side, not a condition
/// to recover from.
pub fn proportion_cutoff(proportion: f64) -> u64 {
    assert!(
        (0.0..=1.0).contains(&proportion),
        "stablehash: proportion {proportion} is outside [0.0, 1.0]",
    );

    let half = (proportion * ((1u64 << 63) as f64)) as u64;

    const CLIP_0: u64 = 1 << 63;
    const CLIP_1: u64 = u64::MAX - CLIP_0;

    CLIP_0.min(half) + CLIP_1.min(half)
}

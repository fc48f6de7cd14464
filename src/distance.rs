use crate::error::{MotifError, Result};
use crate::sequence::{generate_random_sequence, window, RandomSource};
use crate::types::*;

/// Outcome of a single `minimum_distance` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumDistance {
    /// Randomly generated probe whose windows were scored
    pub probe: Sequence,
    /// Fixed sequence the probe was compared against
    pub reference: Sequence,
    /// Smallest mismatch count over all probe windows
    pub distance: usize,
}

/// Counts the positions at which the first `k` symbols of two sequences differ.
///
/// # Arguments
/// * `window` - First sequence, usually a slice of a longer reference
/// * `probe` - Second sequence
/// * `k` - Number of leading positions to compare
///
/// # Returns
/// * `Result<usize>` - Number of mismatched positions, in `0..=k`
///
/// # Errors
/// * Returns `MotifError::WindowOutOfRange` if either input is shorter than `k`
pub fn count_mismatches(window: &str, probe: &str, k: usize) -> Result<usize> {
    let available = window.len().min(probe.len());
    if available < k {
        return Err(MotifError::WindowOutOfRange { k, available });
    }

    Ok(window
        .bytes()
        .zip(probe.bytes())
        .take(k)
        .filter(|(a, b)| a != b)
        .count())
}

/// Slides a `k`-length window over `reference` and scores every offset against `probe`.
///
/// # Arguments
/// * `reference` - Sequence that is partitioned into windows
/// * `probe` - Sequence every window is compared with (only its first `k` symbols matter)
/// * `k` - Window length
///
/// # Returns
/// * `Result<Vec<usize>>` - `len(reference) - k + 1` mismatch counts, one per offset
///
/// # Errors
/// * Returns `MotifError::InvalidArgument` if `k` is zero
/// * Returns `MotifError::WindowOutOfRange` if `k` exceeds either input length
pub fn scan_offsets(reference: &str, probe: &str, k: usize) -> Result<Vec<usize>> {
    if k == 0 {
        return Err(MotifError::invalid_argument(
            "k",
            k,
            "window length must be positive",
        ));
    }
    if k > reference.len() {
        return Err(MotifError::WindowOutOfRange {
            k,
            available: reference.len(),
        });
    }

    (0..=reference.len() - k)
        .map(|offset| count_mismatches(window(reference, offset, k)?, probe, k))
        .collect()
}

/// Computes the distance between a fresh random probe and a reference sequence.
///
/// A random probe of length `k` is generated and partitioned into windows, each of
/// which is compared against the reference truncated to `k` symbols. The smallest
/// mismatch count is the distance. Nothing is printed; pass the returned value to
/// [`crate::report::distance_frame`] to display it.
///
/// # Arguments
/// * `reference` - Fixed sequence of at least `k` symbols
/// * `k` - Probe length
/// * `rng` - Random source for the probe
///
/// # Errors
/// * Returns `MotifError::InvalidArgument` if `k` is zero
/// * Returns `MotifError::WindowOutOfRange` if the reference is shorter than `k`
pub fn minimum_distance<R>(reference: &str, k: usize, rng: &mut R) -> Result<MinimumDistance>
where
    R: RandomSource + ?Sized,
{
    let probe = generate_random_sequence(k, rng)?;
    let distance = scan_offsets(&probe, reference, k)?
        .into_iter()
        .min()
        .ok_or(MotifError::WindowOutOfRange {
            k,
            available: probe.len(),
        })?;

    Ok(MinimumDistance {
        probe,
        reference: reference.to_string(),
        distance,
    })
}

/// Runs `minimum_distance` against `count` freshly generated references of length `k`.
///
/// # Errors
/// * Returns `MotifError::InvalidArgument` if `count` or `k` is zero
pub fn minimum_distance_trials<R>(
    count: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<MinimumDistance>>
where
    R: RandomSource + ?Sized,
{
    if count == 0 {
        return Err(MotifError::invalid_argument(
            "count",
            count,
            "at least one trial is required",
        ));
    }

    (0..count)
        .map(|_| {
            let reference = generate_random_sequence(k, &mut *rng)?;
            minimum_distance(&reference, k, &mut *rng)
        })
        .collect()
}

/// Sum of the distances of a set of trials
pub fn total_distance(trials: &[MinimumDistance]) -> usize {
    trials.iter().map(|t| t.distance).sum()
}

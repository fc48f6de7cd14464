use crate::error::{MotifError, Result};
use crate::profile::{
    build_frequency_profile, build_probability_profile, window_probabilities, Normalization,
    WindowScore,
};
use crate::sequence::{motif_dimensions, window, RandomSource};
use crate::types::*;

/// Upper bound used when drawing the random start of each seed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedBound {
    /// Starts are drawn from `0..=rows - k`.
    ///
    /// Bounds a column offset by the row count, so it only yields valid slices
    /// when `rows <= columns`; other shapes are rejected up front.
    #[default]
    RowCount,
    /// Starts are drawn from `0..=columns - k`
    ColumnCount,
}

/// Options shared by the randomized search and the Gibbs refinement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub seed_bound: SeedBound,
    pub normalization: Normalization,
}

/// Randomly chosen `k`-length slice of every motif row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// Start of the slice in each row
    pub offsets: Vec<usize>,
    /// The slices, in row order
    pub motif: Motif,
}

/// Result of the probability phase of the search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Sub-motif the profile was built from
    pub seed: Motif,
    /// Probability profile of the seed
    pub profile: ProbabilityProfile,
    /// Most probable window of each row of the searched motif
    pub windows: Vec<WindowScore>,
    /// The winning windows, in row order
    pub motif: Motif,
}

/// Builds a random working sub-motif of width `k`.
///
/// # Arguments
/// * `motif` - The motif to slice
/// * `k` - Width of the seed
/// * `bound` - Which dimension bounds the random start offsets
/// * `rng` - Random source, drawn once per row
///
/// # Errors
/// * Returns `MotifError::MalformedMatrix` if the motif is empty or ragged
/// * Returns `MotifError::InvalidArgument` if `k` is zero
/// * Returns `MotifError::WindowOutOfRange` if `k` exceeds the bounding dimension
///   or the drawn starts could run past the end of a row
pub fn seed_motif<S, R>(motif: &[S], k: usize, bound: SeedBound, rng: &mut R) -> Result<Seed>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let (rows, cols) = motif_dimensions(motif)?;
    if k == 0 {
        return Err(MotifError::invalid_argument(
            "k",
            k,
            "window length must be positive",
        ));
    }
    if k > cols {
        return Err(MotifError::WindowOutOfRange { k, available: cols });
    }

    let max_start = match bound {
        SeedBound::RowCount => rows
            .checked_sub(k)
            .ok_or(MotifError::WindowOutOfRange { k, available: rows })?,
        SeedBound::ColumnCount => cols - k,
    };
    if max_start + k > cols {
        return Err(MotifError::WindowOutOfRange {
            k: max_start + k,
            available: cols,
        });
    }

    let offsets: Vec<usize> = motif
        .iter()
        .map(|_| rng.next_index(max_start + 1))
        .collect();
    let seed = motif
        .iter()
        .zip(&offsets)
        .map(|(row, &offset)| window(row.as_ref(), offset, k).map(str::to_string))
        .collect::<Result<Motif>>()?;

    log::debug!("seed offsets {:?} (bound {:?})", offsets, bound);

    Ok(Seed {
        offsets,
        motif: seed,
    })
}

/// Finds the most probable `k`-length window of a sequence.
///
/// Ties go to the earliest offset.
///
/// # Returns
/// * `Result<Option<WindowScore>>` - `None` when the sequence is shorter than `k`
///
/// # Errors
/// * Returns `MotifError::InvalidArgument` if `k` is zero
/// * Returns `MotifError::WindowOutOfRange` if `k` exceeds the profile width
pub fn best_window(
    sequence: &str,
    profile: &ProbabilityProfile,
    k: usize,
) -> Result<Option<WindowScore>> {
    if k > sequence.len() {
        return Ok(None);
    }

    let mut best: Option<WindowScore> = None;
    for score in window_probabilities(sequence, profile, k)? {
        log::trace!(
            "window {} at {} -> {}",
            score.window,
            score.offset,
            score.probability
        );
        let improves = best
            .as_ref()
            .map_or(true, |current| score.probability > current.probability);
        if improves {
            best = Some(score);
        }
    }

    Ok(best)
}

/// Runs the probability phase of the search with a caller-supplied seed.
///
/// A probability profile is built from `seed`, then every row of `motif` is
/// scanned for its most probable `k`-length window.
///
/// # Errors
/// * Returns `MotifError::MalformedMatrix` if `motif` or `seed` is empty or ragged
/// * Returns `MotifError::NoWindowsAvailable` if `k` exceeds the motif width
/// * Returns `MotifError::WindowOutOfRange` if `k` exceeds the seed width
pub fn search_with_seed<S, T>(
    motif: &[S],
    seed: &[T],
    k: usize,
    normalization: Normalization,
) -> Result<SearchResult>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    motif_dimensions(motif)?;
    let freq = build_frequency_profile(seed)?;
    let profile = build_probability_profile(&freq, normalization)?;

    let windows = motif
        .iter()
        .enumerate()
        .map(|(row, sequence)| {
            best_window(sequence.as_ref(), &profile, k)?
                .ok_or(MotifError::NoWindowsAvailable { row, k })
        })
        .collect::<Result<Vec<_>>>()?;

    for (row, best) in windows.iter().enumerate() {
        log::debug!(
            "row {}: best window {} at offset {} (p = {})",
            row,
            best.window,
            best.offset,
            best.probability
        );
    }

    Ok(SearchResult {
        seed: seed.iter().map(|s| s.as_ref().to_string()).collect(),
        profile,
        motif: windows.iter().map(|w| w.window.clone()).collect(),
        windows,
    })
}

/// Randomized motif search.
///
/// Seeds a random `k`-wide sub-motif from `motif`, builds its probability
/// profile and picks the most probable window of every row.
///
/// # Errors
/// * Returns `MotifError::MalformedMatrix` if the motif is empty or ragged
/// * Returns `MotifError::InvalidArgument` if `k` is zero
/// * Returns `MotifError::NoWindowsAvailable` if `k` exceeds the motif width
/// * Returns `MotifError::WindowOutOfRange` if the seed bound cannot produce valid slices
pub fn randomized_motif_search<S, R>(
    motif: &[S],
    k: usize,
    options: SearchOptions,
    rng: &mut R,
) -> Result<SearchResult>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let (_, cols) = motif_dimensions(motif)?;
    if k == 0 {
        return Err(MotifError::invalid_argument(
            "k",
            k,
            "window length must be positive",
        ));
    }
    if k > cols {
        return Err(MotifError::NoWindowsAvailable { row: 0, k });
    }

    let seed = seed_motif(motif, k, options.seed_bound, rng)?;
    search_with_seed(motif, &seed.motif, k, options.normalization)
}

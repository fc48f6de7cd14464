use crate::error::{MotifError, Result};
use crate::profile::{build_frequency_profile, build_probability_profile, motif_score};
use crate::search::{best_window, seed_motif, SearchOptions};
use crate::sequence::{motif_dimensions, RandomSource};
use crate::types::*;

const DEFAULT_ITERATIONS: usize = 100;

/// Settings of the Gibbs-style refinement loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GibbsOptions {
    /// Exact number of hold-out iterations to run
    pub iterations: usize,
    /// Seeding and normalization settings
    pub search: SearchOptions,
}

impl Default for GibbsOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            search: SearchOptions::default(),
        }
    }
}

/// Best motif found by the refinement loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GibbsResult {
    /// Lowest-scoring motif seen, including the seed
    pub motif: Motif,
    /// Start of each row's window in the searched motif
    pub offsets: Vec<usize>,
    /// `motif_score` of `motif`
    pub score: usize,
    /// Iteration that produced `motif`; 0 when the seed was never improved
    pub best_iteration: usize,
    /// Number of iterations run
    pub iterations: usize,
}

/// Refines a randomly seeded motif by repeatedly re-fitting one held-out row.
///
/// Each iteration picks a row uniformly at random, builds a probability profile
/// from the current windows of all other rows and replaces the held-out row's
/// window with its most probable one under that profile. The loop stops after
/// exactly `options.iterations` iterations and returns the best motif seen, as
/// ranked by [`motif_score`].
///
/// # Arguments
/// * `motif` - Rectangular motif with at least two rows
/// * `k` - Window length
/// * `options` - Iteration count, seed bound and normalization
/// * `rng` - Random source for the seed and the held-out rows
///
/// # Errors
/// * Returns `MotifError::MalformedMatrix` if the motif is empty or ragged
/// * Returns `MotifError::InvalidArgument` if the motif has fewer than two rows,
///   `k` is zero or `options.iterations` is zero
/// * Returns `MotifError::WindowOutOfRange` if the seed cannot be built
pub fn gibbs_sampler<S, R>(
    motif: &[S],
    k: usize,
    options: GibbsOptions,
    rng: &mut R,
) -> Result<GibbsResult>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let (rows, _) = motif_dimensions(motif)?;
    if rows < 2 {
        return Err(MotifError::invalid_argument(
            "rows",
            rows,
            "at least two rows are needed to hold one out",
        ));
    }
    if options.iterations == 0 {
        return Err(MotifError::invalid_argument(
            "iterations",
            options.iterations,
            "at least one iteration is required",
        ));
    }

    let seed = seed_motif(motif, k, options.search.seed_bound, rng)?;
    let mut offsets = seed.offsets;
    let mut current = seed.motif;

    let mut best = GibbsResult {
        score: motif_score(&current)?,
        motif: current.clone(),
        offsets: offsets.clone(),
        best_iteration: 0,
        iterations: options.iterations,
    };

    for iteration in 1..=options.iterations {
        let held_out = rng.next_index(rows);
        let remainder: Vec<&str> = current
            .iter()
            .enumerate()
            .filter(|&(row, _)| row != held_out)
            .map(|(_, kmer)| kmer.as_str())
            .collect();

        let freq = build_frequency_profile(&remainder)?;
        let profile = build_probability_profile(&freq, options.search.normalization)?;
        let winner = best_window(motif[held_out].as_ref(), &profile, k)?
            .ok_or(MotifError::NoWindowsAvailable { row: held_out, k })?;

        offsets[held_out] = winner.offset;
        current[held_out] = winner.window;

        let score = motif_score(&current)?;
        log::debug!(
            "iteration {}: held out row {}, score {} (best {})",
            iteration,
            held_out,
            score,
            best.score
        );

        if score < best.score {
            best.score = score;
            best.motif = current.clone();
            best.offsets = offsets.clone();
            best.best_iteration = iteration;
        }
    }

    Ok(best)
}

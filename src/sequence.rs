use crate::error::{MotifError, Result};
use crate::types::*;
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform random draws used by every randomized step of the library.
///
/// Production code passes a [`ThreadRng`] or a seeded [`StdRng`]; tests can
/// substitute any type that replays a fixed list of draws.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Returns one of A, C, G, T with equal probability
    fn next_nucleotide(&mut self) -> char {
        NUCLEOTIDES[self.next_index(NUCLEOTIDES.len())]
    }
}

impl RandomSource for StdRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

impl RandomSource for ThreadRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Generates a uniformly random DNA sequence.
///
/// # Arguments
/// * `k` - Length of the sequence to generate
/// * `rng` - Random source used for every position
///
/// # Returns
/// * `Result<Sequence>` - A sequence of `k` symbols drawn from A, C, G, T
///
/// # Errors
/// * Returns `MotifError::InvalidArgument` if `k` is zero
pub fn generate_random_sequence<R>(k: usize, rng: &mut R) -> Result<Sequence>
where
    R: RandomSource + ?Sized,
{
    if k == 0 {
        return Err(MotifError::invalid_argument(
            "k",
            k,
            "sequence length must be positive",
        ));
    }

    Ok((0..k).map(|_| rng.next_nucleotide()).collect())
}

/// Generates a motif matrix of independent random rows.
///
/// # Arguments
/// * `rows` - Number of sequences in the motif
/// * `cols` - Length of every sequence
/// * `rng` - Random source shared by all rows
///
/// # Returns
/// * `Result<Motif>` - `rows` sequences of length `cols`, in generation order
///
/// # Errors
/// * Returns `MotifError::InvalidArgument` if `rows` or `cols` is zero
pub fn generate_random_motif<R>(rows: usize, cols: usize, rng: &mut R) -> Result<Motif>
where
    R: RandomSource + ?Sized,
{
    if rows == 0 {
        return Err(MotifError::invalid_argument(
            "rows",
            rows,
            "motif must have at least one row",
        ));
    }

    (0..rows)
        .map(|_| generate_random_sequence(cols, &mut *rng))
        .collect()
}

/// Checks that a motif is non-empty and rectangular.
///
/// # Returns
/// * `Result<(usize, usize)>` - The `(rows, columns)` shape of the motif
///
/// # Errors
/// * Returns `MotifError::MalformedMatrix` if the motif has no rows or its rows
///   differ in length
pub fn motif_dimensions<S: AsRef<str>>(motif: &[S]) -> Result<(usize, usize)> {
    let first = motif
        .first()
        .ok_or_else(|| MotifError::malformed_matrix("motif has no rows"))?;
    let width = first.as_ref().len();

    for (idx, row) in motif.iter().enumerate().skip(1) {
        let len = row.as_ref().len();
        if len != width {
            return Err(MotifError::malformed_matrix(format!(
                "row {} has {} columns, expected {}",
                idx, len, width
            )));
        }
    }

    Ok((motif.len(), width))
}

/// Checks that every symbol of a sequence is one of A, C, G, T.
///
/// # Errors
/// * Returns `MotifError::InvalidSequence` at the first offending position
pub fn validate_sequence(sequence: &str) -> Result<()> {
    match sequence
        .chars()
        .position(|c| !NUCLEOTIDE_INDEX.contains_key(&c))
    {
        Some(position) => Err(MotifError::invalid_sequence(
            position,
            "expected one of A, C, G, T",
        )),
        None => Ok(()),
    }
}

/// Returns the `k`-length window of `sequence` starting at `offset`.
///
/// # Errors
/// * Returns `MotifError::WindowOutOfRange` if the window runs past the end
pub fn window(sequence: &str, offset: usize, k: usize) -> Result<&str> {
    sequence
        .get(offset..offset + k)
        .ok_or(MotifError::WindowOutOfRange {
            k,
            available: sequence.len().saturating_sub(offset),
        })
}

use crate::distance::count_mismatches;
use crate::error::{MotifError, Result};
use crate::sequence::{motif_dimensions, window};
use crate::types::*;
use ndarray::Array2;

/// How a frequency profile is turned into probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide every cell by the total count of column 0.
    ///
    /// Matches per-column normalization only while every column has the same
    /// total, which holds for motifs made exclusively of A, C, G, T.
    #[default]
    FirstColumn,
    /// Divide every cell by the total count of its own column
    PerColumn,
}

/// Probability assigned to one window of a scanned sequence
#[derive(Debug, Clone, PartialEq)]
pub struct WindowScore {
    /// Start of the window in the scanned sequence
    pub offset: usize,
    /// The window itself
    pub window: Sequence,
    /// Profile probability, rounded to 4 decimal places
    pub probability: f64,
}

/// Builds the absolute frequency profile of a motif.
///
/// Row `i` of the result counts `NUCLEOTIDES[i]` in each column. Symbols other
/// than A, C, G, T (gaps, `N`) are not counted, so such columns sum to less than
/// the number of rows.
///
/// # Arguments
/// * `motif` - Rectangular collection of aligned sequences
///
/// # Returns
/// * `Result<FrequencyProfile>` - A 4 x L count matrix, L being the motif width
///
/// # Errors
/// * Returns `MotifError::MalformedMatrix` if the motif is empty, has zero-length
///   rows, or is ragged
pub fn build_frequency_profile<S: AsRef<str>>(motif: &[S]) -> Result<FrequencyProfile> {
    let (_, cols) = motif_dimensions(motif)?;
    if cols == 0 {
        return Err(MotifError::malformed_matrix("motif rows are empty"));
    }

    let mut profile = Array2::<u32>::zeros((NUCLEOTIDES.len(), cols));
    for row in motif {
        for (col, symbol) in row.as_ref().chars().enumerate() {
            if let Some(&idx) = NUCLEOTIDE_INDEX.get(&symbol) {
                profile[[idx, col]] += 1;
            }
        }
    }

    Ok(profile)
}

/// Derives the consensus sequence of a frequency profile.
///
/// Each column is scanned in A, C, G, T order and a symbol replaces the current
/// choice whenever its count is greater than or equal to the running maximum.
/// Ties therefore go to the last tied symbol, and an all-zero column yields `T`.
pub fn consensus_sequence(profile: &FrequencyProfile) -> Sequence {
    profile
        .columns()
        .into_iter()
        .map(|column| {
            let mut max_count = 0;
            let mut symbol = NUCLEOTIDES[0];
            for (&count, &nucleotide) in column.iter().zip(NUCLEOTIDES.iter()) {
                if count >= max_count {
                    max_count = count;
                    symbol = nucleotide;
                }
            }
            symbol
        })
        .collect()
}

/// Converts a frequency profile into a probability profile.
///
/// # Arguments
/// * `freq` - A 4 x L count matrix
/// * `normalization` - Which column totals to divide by
///
/// # Returns
/// * `Result<ProbabilityProfile>` - A 4 x L matrix of the same shape
///
/// # Errors
/// * Returns `MotifError::MalformedMatrix` if the profile does not have 4 rows,
///   has no columns, or (with `Normalization::FirstColumn`) column 0 is all zero
pub fn build_probability_profile(
    freq: &FrequencyProfile,
    normalization: Normalization,
) -> Result<ProbabilityProfile> {
    if freq.nrows() != NUCLEOTIDES.len() {
        return Err(MotifError::malformed_matrix(format!(
            "profile has {} rows, expected {}",
            freq.nrows(),
            NUCLEOTIDES.len()
        )));
    }
    if freq.ncols() == 0 {
        return Err(MotifError::malformed_matrix("profile has no columns"));
    }

    let mut probabilities = freq.mapv(f64::from);
    match normalization {
        Normalization::FirstColumn => {
            let total = probabilities.column(0).sum();
            if total == 0.0 {
                return Err(MotifError::malformed_matrix("profile column 0 has no counts"));
            }
            probabilities.mapv_inplace(|v| v / total);
        }
        Normalization::PerColumn => {
            for (idx, mut column) in probabilities.columns_mut().into_iter().enumerate() {
                let total = column.sum();
                if total == 0.0 {
                    log::warn!("profile column {} has no counts, leaving it at zero", idx);
                    continue;
                }
                column.mapv_inplace(|v| v / total);
            }
        }
    }

    Ok(probabilities)
}

/// Probability of a window under a profile, rounded to 4 decimal places.
///
/// Position `i` of the window contributes the profile value of its symbol at
/// column `i`. Symbols other than A, C, G, T contribute nothing.
///
/// # Errors
/// * Returns `MotifError::WindowOutOfRange` if the window is longer than the profile
pub fn probability_of_window(window: &str, profile: &ProbabilityProfile) -> Result<f64> {
    if window.len() > profile.ncols() {
        return Err(MotifError::WindowOutOfRange {
            k: window.len(),
            available: profile.ncols(),
        });
    }

    let probability: f64 = window
        .chars()
        .enumerate()
        .filter_map(|(col, symbol)| {
            NUCLEOTIDE_INDEX
                .get(&symbol)
                .map(|&row| profile[[row, col]])
        })
        .product();

    Ok(round_probability(probability))
}

/// Scores every `k`-length window of a sequence against a profile.
///
/// # Errors
/// * Returns `MotifError::InvalidArgument` if `k` is zero
/// * Returns `MotifError::WindowOutOfRange` if `k` exceeds the sequence or profile length
pub fn window_probabilities(
    sequence: &str,
    profile: &ProbabilityProfile,
    k: usize,
) -> Result<Vec<WindowScore>> {
    if k == 0 {
        return Err(MotifError::invalid_argument(
            "k",
            k,
            "window length must be positive",
        ));
    }
    if k > sequence.len() {
        return Err(MotifError::WindowOutOfRange {
            k,
            available: sequence.len(),
        });
    }

    (0..=sequence.len() - k)
        .map(|offset| {
            let kmer = window(sequence, offset, k)?;
            Ok(WindowScore {
                offset,
                window: kmer.to_string(),
                probability: probability_of_window(kmer, profile)?,
            })
        })
        .collect()
}

/// Total number of mismatches between every row of a motif and its consensus.
///
/// Lower is better; a motif whose rows are all identical scores 0.
pub fn motif_score<S: AsRef<str>>(motif: &[S]) -> Result<usize> {
    let freq = build_frequency_profile(motif)?;
    let consensus = consensus_sequence(&freq);

    let mut score = 0;
    for row in motif {
        score += count_mismatches(row.as_ref(), &consensus, consensus.len())?;
    }
    Ok(score)
}

fn round_probability(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_probability() {
        assert_eq!(round_probability(0.123_449), 0.1234);
        assert_eq!(round_probability(0.123_46), 0.1235);
        assert_eq!(round_probability(1.0), 1.0);
        assert_eq!(round_probability(0.000_04), 0.0);
    }
}

use ndarray::Array2;
use polars::prelude::*;

/// A DNA sequence over the alphabet A, C, G, T
pub type Sequence = String;

/// Rectangular collection of equal-length sequences (rows are observations,
/// columns are aligned positions)
pub type Motif = Vec<Sequence>;

/// Absolute symbol counts, shape 4 x L with rows in `NUCLEOTIDES` order
pub type FrequencyProfile = Array2<u32>;

/// Normalized symbol probabilities, shape 4 x L with rows in `NUCLEOTIDES` order
pub type ProbabilityProfile = Array2<f64>;

/// Represents a Position Weight Matrix (PWM)
/// Stored as a DataFrame with columns A, C, G, T
pub type PWM = DataFrame;

/// Fixed row order of every profile matrix
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Profile row of each nucleotide
pub static NUCLEOTIDE_INDEX: phf::Map<char, usize> = phf::phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};

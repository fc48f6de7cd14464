use crate::distance::MinimumDistance;
use crate::error::{MotifError, Result};
use crate::profile::WindowScore;
use crate::search::SearchResult;
use crate::types::*;
use ndarray::Array2;
use polars::prelude::*;

/// Lays a profile out as a PWM: one row per motif position, columns A, C, G, T.
fn profile_frame<T, F>(profile: &Array2<T>, to_column: F) -> Result<PWM>
where
    F: Fn(&str, Vec<T>) -> Column,
    T: Clone,
{
    let columns = NUCLEOTIDES
        .iter()
        .zip(profile.rows())
        .map(|(nucleotide, row)| to_column(nucleotide.to_string().as_str(), row.to_vec()))
        .collect::<Vec<_>>();

    DataFrame::new(columns).map_err(|e| MotifError::DataError(e.to_string()))
}

/// Renders a frequency profile as a PWM-shaped DataFrame of counts.
///
/// # Returns
/// * `Result<PWM>` - A DataFrame with one row per motif position and columns
///   "A", "C", "G", "T" holding the counts
///
/// # Errors
/// * Returns `MotifError::DataError` if DataFrame creation fails
pub fn frequency_frame(profile: &FrequencyProfile) -> Result<PWM> {
    profile_frame(profile, |name, values| Column::new(name.into(), values))
}

/// Renders a probability profile as a PWM-shaped DataFrame.
///
/// # Returns
/// * `Result<PWM>` - A DataFrame with one row per motif position and columns
///   "A", "C", "G", "T" holding the probabilities
///
/// # Errors
/// * Returns `MotifError::DataError` if DataFrame creation fails
pub fn probability_frame(profile: &ProbabilityProfile) -> Result<PWM> {
    profile_frame(profile, |name, values| Column::new(name.into(), values))
}

/// Renders a motif as a DataFrame with "row" and "sequence" columns
pub fn motif_frame<S: AsRef<str>>(motif: &[S]) -> Result<DataFrame> {
    let rows: Vec<u32> = (0..motif.len() as u32).collect();
    let sequences: Vec<&str> = motif.iter().map(|s| s.as_ref()).collect();

    DataFrame::new(vec![
        Column::new("row".into(), rows),
        Column::new("sequence".into(), sequences),
    ])
    .map_err(|e| MotifError::DataError(e.to_string()))
}

/// Renders window scores as a DataFrame with "offset", "window" and "probability" columns
pub fn window_frame(scores: &[WindowScore]) -> Result<DataFrame> {
    DataFrame::new(vec![
        Column::new(
            "offset".into(),
            scores.iter().map(|s| s.offset as u64).collect::<Vec<_>>(),
        ),
        Column::new(
            "window".into(),
            scores.iter().map(|s| s.window.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "probability".into(),
            scores.iter().map(|s| s.probability).collect::<Vec<_>>(),
        ),
    ])
    .map_err(|e| MotifError::DataError(e.to_string()))
}

/// Renders distance trials as a DataFrame with "probe", "reference" and "distance" columns
pub fn distance_frame(trials: &[MinimumDistance]) -> Result<DataFrame> {
    DataFrame::new(vec![
        Column::new(
            "probe".into(),
            trials.iter().map(|t| t.probe.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "reference".into(),
            trials.iter().map(|t| t.reference.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "distance".into(),
            trials.iter().map(|t| t.distance as u64).collect::<Vec<_>>(),
        ),
    ])
    .map_err(|e| MotifError::DataError(e.to_string()))
}

/// Renders a search result with one row per searched sequence.
///
/// Columns are "row", "seed", "offset", "window" and "probability".
pub fn search_frame(result: &SearchResult) -> Result<DataFrame> {
    let windows = &result.windows;

    DataFrame::new(vec![
        Column::new("row".into(), (0..windows.len() as u32).collect::<Vec<_>>()),
        Column::new(
            "seed".into(),
            (0..windows.len())
                .map(|idx| result.seed.get(idx).map(String::as_str))
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "offset".into(),
            windows.iter().map(|w| w.offset as u64).collect::<Vec<_>>(),
        ),
        Column::new(
            "window".into(),
            windows.iter().map(|w| w.window.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "probability".into(),
            windows.iter().map(|w| w.probability).collect::<Vec<_>>(),
        ),
    ])
    .map_err(|e| MotifError::DataError(e.to_string()))
}

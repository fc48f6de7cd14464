mod common;

use common::assert_close;
use motif_search_rs::error::MotifError;
use motif_search_rs::profile::{self, Normalization};
use motif_search_rs::sequence;
use motif_search_rs::types::FrequencyProfile;
use ndarray::{array, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_motif() -> Vec<&'static str> {
    vec!["ATC", "ATG", "AAC"]
}

#[test]
fn test_build_frequency_profile() {
    let freq = profile::build_frequency_profile(&small_motif()).unwrap();

    let expected: FrequencyProfile = array![
        [3, 1, 0], // A
        [0, 0, 2], // C
        [0, 0, 1], // G
        [0, 2, 0], // T
    ];
    assert_eq!(freq, expected);

    // ragged and empty motifs are rejected
    assert!(matches!(
        profile::build_frequency_profile(&["ATC", "AT"]),
        Err(MotifError::MalformedMatrix(_))
    ));
    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        profile::build_frequency_profile(&empty),
        Err(MotifError::MalformedMatrix(_))
    ));
    assert!(matches!(
        profile::build_frequency_profile(&["", ""]),
        Err(MotifError::MalformedMatrix(_))
    ));
}

#[test]
fn test_frequency_column_sums() {
    let mut rng = StdRng::seed_from_u64(11);
    for (rows, cols) in [(1, 1), (5, 10), (10, 12), (8, 3)] {
        let motif = sequence::generate_random_motif(rows, cols, &mut rng).unwrap();
        let freq = profile::build_frequency_profile(&motif).unwrap();

        assert_eq!(freq.shape(), &[4, cols]);
        for &total in freq.sum_axis(Axis(0)).iter() {
            assert_eq!(total as usize, rows);
        }
    }
}

#[test]
fn test_consensus_sequence() {
    let freq = profile::build_frequency_profile(&small_motif()).unwrap();
    assert_eq!(profile::consensus_sequence(&freq), "ATC");

    // ties go to the last tied symbol in A, C, G, T order
    let tied = array![[2], [2], [0], [0]];
    assert_eq!(profile::consensus_sequence(&tied), "C");

    let tied = array![[1, 0], [0, 3], [1, 3], [1, 0]];
    assert_eq!(profile::consensus_sequence(&tied), "TG");

    // an empty column falls through to T
    let empty = array![[0], [0], [0], [0]];
    assert_eq!(profile::consensus_sequence(&empty), "T");
}

#[test]
fn test_build_probability_profile() {
    let freq = profile::build_frequency_profile(&small_motif()).unwrap();
    let probs = profile::build_probability_profile(&freq, Normalization::FirstColumn).unwrap();

    assert_eq!(probs.shape(), &[4, 3]);
    assert_close(probs[[0, 0]], 1.0);
    assert_close(probs[[0, 1]], 1.0 / 3.0);
    assert_close(probs[[3, 1]], 2.0 / 3.0);
    assert_close(probs[[1, 2]], 2.0 / 3.0);
    assert_close(probs[[2, 2]], 1.0 / 3.0);

    for column in probs.columns() {
        assert!(column.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert_close(column.sum(), 1.0);
    }

    // both normalizations agree on motifs made only of A, C, G, T
    let per_column = profile::build_probability_profile(&freq, Normalization::PerColumn).unwrap();
    assert_eq!(probs, per_column);
}

#[test]
fn test_probability_profile_with_missing_symbols() {
    // the last column only has one countable symbol
    let motif = ["AC-", "AGT", "ATN"];
    let freq = profile::build_frequency_profile(&motif).unwrap();
    assert_eq!(freq.column(2).sum(), 1);

    let first = profile::build_probability_profile(&freq, Normalization::FirstColumn).unwrap();
    assert_close(first.column(0).sum(), 1.0);
    assert_close(first.column(1).sum(), 1.0);
    assert_close(first.column(2).sum(), 1.0 / 3.0);

    let per_column = profile::build_probability_profile(&freq, Normalization::PerColumn).unwrap();
    for column in per_column.columns() {
        assert_close(column.sum(), 1.0);
    }
    assert_close(per_column[[3, 2]], 1.0);
}

#[test]
fn test_probability_profile_degenerate_columns() {
    let freq = profile::build_frequency_profile(&["NA", "NC"]).unwrap();

    assert!(matches!(
        profile::build_probability_profile(&freq, Normalization::FirstColumn),
        Err(MotifError::MalformedMatrix(_))
    ));

    let probs = profile::build_probability_profile(&freq, Normalization::PerColumn).unwrap();
    assert_close(probs.column(0).sum(), 0.0);
    assert_close(probs[[0, 1]], 0.5);
    assert_close(probs[[1, 1]], 0.5);

    let wrong_shape = array![[1, 2], [3, 4]];
    assert!(profile::build_probability_profile(&wrong_shape, Normalization::FirstColumn).is_err());
}

#[test]
fn test_probability_of_window() {
    let freq = profile::build_frequency_profile(&small_motif()).unwrap();
    let probs = profile::build_probability_profile(&freq, Normalization::FirstColumn).unwrap();

    // 1 * 2/3 * 2/3, rounded to 4 places
    let p = profile::probability_of_window("ATC", &probs).unwrap();
    assert_eq!(p, 0.4444);
    assert_eq!(profile::probability_of_window("ATC", &probs).unwrap(), p);

    assert_eq!(profile::probability_of_window("AAG", &probs).unwrap(), 0.1111);
    assert_eq!(profile::probability_of_window("CTC", &probs).unwrap(), 0.0);

    // unknown symbols are skipped, shorter windows use the leading columns
    assert_eq!(profile::probability_of_window("ANC", &probs).unwrap(), 0.6667);
    assert_eq!(profile::probability_of_window("AT", &probs).unwrap(), 0.6667);

    assert!(matches!(
        profile::probability_of_window("ATCG", &probs),
        Err(MotifError::WindowOutOfRange { k: 4, available: 3 })
    ));
}

#[test]
fn test_window_probabilities() {
    let freq = profile::build_frequency_profile(&small_motif()).unwrap();
    let probs = profile::build_probability_profile(&freq, Normalization::FirstColumn).unwrap();

    let scores = profile::window_probabilities("AATCG", &probs, 3).unwrap();
    let offsets: Vec<usize> = scores.iter().map(|s| s.offset).collect();
    let windows: Vec<&str> = scores.iter().map(|s| s.window.as_str()).collect();
    let values: Vec<f64> = scores.iter().map(|s| s.probability).collect();

    assert_eq!(offsets, vec![0, 1, 2]);
    assert_eq!(windows, vec!["AAT", "ATC", "TCG"]);
    assert_eq!(values, vec![0.0, 0.4444, 0.0]);

    assert!(profile::window_probabilities("AA", &probs, 3).is_err());
    assert!(profile::window_probabilities("AATCG", &probs, 0).is_err());
}

#[test]
fn test_motif_score() {
    assert_eq!(profile::motif_score(&small_motif()).unwrap(), 2);
    assert_eq!(profile::motif_score(&["ACG", "ACG"]).unwrap(), 0);
    assert!(profile::motif_score(&["ACG", "AC"]).is_err());
}

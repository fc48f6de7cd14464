use motif_search_rs::distance::MinimumDistance;
use motif_search_rs::profile::{self, Normalization};
use motif_search_rs::report;
use motif_search_rs::search;

#[test]
fn test_profile_frames() {
    let motif = ["ATC", "ATG", "AAC"];
    let freq = profile::build_frequency_profile(&motif).unwrap();
    let probs = profile::build_probability_profile(&freq, Normalization::FirstColumn).unwrap();

    let df = report::frequency_frame(&freq).unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 4);
    for name in ["A", "C", "G", "T"] {
        assert!(df.column(name).is_ok());
    }
    let a = df.column("A").unwrap();
    assert_eq!(a.get(0).unwrap().try_extract::<u32>().unwrap(), 3);
    assert_eq!(a.get(1).unwrap().try_extract::<u32>().unwrap(), 1);

    let df = report::probability_frame(&probs).unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 4);
    let t = df.column("T").unwrap();
    let p = t.get(1).unwrap().try_extract::<f64>().unwrap();
    assert!((p - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_motif_and_window_frames() {
    let df = report::motif_frame(&["ACG", "TTT"]).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 2);

    let freq = profile::build_frequency_profile(&["ATC", "ATG", "AAC"]).unwrap();
    let probs = profile::build_probability_profile(&freq, Normalization::FirstColumn).unwrap();
    let scores = profile::window_probabilities("AATCG", &probs, 3).unwrap();

    let df = report::window_frame(&scores).unwrap();
    assert_eq!(df.height(), 3);
    let p = df
        .column("probability")
        .unwrap()
        .get(1)
        .unwrap()
        .try_extract::<f64>()
        .unwrap();
    assert_eq!(p, 0.4444);
}

#[test]
fn test_distance_and_search_frames() {
    let trials = vec![
        MinimumDistance {
            probe: "ACGT".to_string(),
            reference: "ACGA".to_string(),
            distance: 1,
        },
        MinimumDistance {
            probe: "TTTT".to_string(),
            reference: "TTTT".to_string(),
            distance: 0,
        },
    ];
    let df = report::distance_frame(&trials).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);

    let motif = ["ACGT", "AGGT", "TCGA", "CAGT"];
    let seed = ["ACG", "GGT", "TCG", "AGT"];
    let result = search::search_with_seed(&motif, &seed, 3, Normalization::FirstColumn).unwrap();
    let df = report::search_frame(&result).unwrap();
    assert_eq!(df.height(), 4);
    assert_eq!(df.width(), 5);
}

//! Invariants every binning rule must uphold

mod common;

use common::{all_rules, normal_sample};
use proptest::prelude::*;
use spc_histogram::{build_histogram, BinningRule, HistogramData};

fn assert_well_formed(hist: &HistogramData, data: &[f64]) {
    assert_eq!(hist.bins().len(), hist.counts().len() + 1);
    assert!(
        hist.bins().windows(2).all(|w| w[0] < w[1]),
        "edges must be strictly increasing: {:?}",
        hist.bins()
    );
    assert_eq!(hist.total_count(), data.len());

    for &x in data {
        let idx = hist.find_bin(x).expect("every measurement lies inside the edges");
        let bin = hist.bin(idx).unwrap();
        let is_last = idx == hist.len() - 1;
        assert!(x >= bin.left && (x < bin.right || (is_last && x <= bin.right)));
    }
}

#[test]
fn test_normal_samples_all_rules() {
    let data = normal_sample(10.0, 1.0, 500, 7);
    for rule in all_rules() {
        let hist = build_histogram(&data, rule).unwrap();
        assert_well_formed(&hist, &data);
    }
}

#[test]
fn test_counts_match_direct_tally() {
    let data = normal_sample(0.0, 3.0, 200, 11);
    let hist = build_histogram(&data, BinningRule::Sturges).unwrap();
    let edges = hist.bins();
    for (i, &count) in hist.counts().iter().enumerate() {
        let last = i == hist.len() - 1;
        let tally = data
            .iter()
            .filter(|&&x| x >= edges[i] && (x < edges[i + 1] || (last && x == edges[i + 1])))
            .count();
        assert_eq!(count, tally, "bin {i}");
    }
}

#[test]
fn test_edges_span_observed_range() {
    let data = normal_sample(50.0, 5.0, 64, 3);
    let hist = build_histogram(&data, BinningRule::Sturges).unwrap();
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(hist.min(), min);
    assert_eq!(hist.max(), max);
}

proptest! {
    #[test]
    fn prop_counts_sum_to_sample_size(
        data in prop::collection::vec(-1e6f64..1e6, 1..300),
        bins in 1usize..60,
    ) {
        let hist = build_histogram(&data, BinningRule::Fixed(bins)).unwrap();
        prop_assert_eq!(hist.total_count(), data.len());
        prop_assert!(hist.bins().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_rules_account_for_every_value(data in prop::collection::vec(-100.0f64..100.0, 2..200)) {
        for rule in all_rules() {
            let hist = build_histogram(&data, rule).unwrap();
            prop_assert_eq!(hist.total_count(), data.len());
        }
    }
}

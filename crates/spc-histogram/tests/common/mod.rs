//! Shared utilities for integration tests

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Draw `n` normal measurements from a seeded generator
pub fn normal_sample(mean: f64, std_dev: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Rules exercised by every property
pub fn all_rules() -> Vec<spc_histogram::BinningRule> {
    use spc_histogram::BinningRule;
    vec![
        BinningRule::Sturges,
        BinningRule::Scott,
        BinningRule::FreedmanDiaconis,
        BinningRule::Fixed(1),
        BinningRule::Fixed(7),
        BinningRule::Fixed(50),
    ]
}

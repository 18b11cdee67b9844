//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring `RUST_LOG`; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Draw `n` normal measurements from a seeded generator
pub fn normal_sample(mean: f64, std_dev: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Three points whose sample mean and sample standard deviation are exactly
/// `mean` and `std_dev` for small integral inputs
pub fn three_point_sample(mean: f64, std_dev: f64) -> Vec<f64> {
    vec![mean - std_dev, mean, mean + std_dev]
}

//! Histogram construction for process measurements
//!
//! Builds the frequency histogram that accompanies a capability study. All
//! strategies produce evenly spaced edges spanning the observed range, so the
//! bars line up with a fitted normal curve drawn over the same axis.
//!
//! # Key Features
//!
//! - **Several bin-count rules**: Sturges (default), Scott, Freedman-Diaconis, fixed
//! - **Exact accounting**: counts always sum to the sample size
//! - **Serializable**: [`HistogramData`] serializes as `{bins, counts}`
//!
//! # Examples
//!
//! ```rust
//! use spc_histogram::{build_histogram, BinningRule};
//!
//! let data = vec![9.8, 10.1, 10.0, 9.9, 10.3, 10.2, 9.7, 10.0];
//! let histogram = build_histogram(&data, BinningRule::Sturges).unwrap();
//!
//! assert_eq!(histogram.bins().len(), histogram.counts().len() + 1);
//! assert_eq!(histogram.total_count(), data.len());
//! for bin in histogram.iter_bins() {
//!     println!("{bin}");
//! }
//! ```

pub mod builders;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{
    BinningRule, FixedWidthBuilder, FreedmanDiaconisRule, ScottsRule, SturgesRule, MAX_BINS,
};
pub use traits::HistogramBuilder;
pub use types::{HistogramBin, HistogramData};

pub use spc_core::Result;

/// Build a histogram of `measurements` using `rule`
pub fn build_histogram(measurements: &[f64], rule: BinningRule) -> Result<HistogramData> {
    rule.build(measurements)
}

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(measurements: &[f64], num_bins: usize) -> Result<HistogramData> {
    build_histogram(measurements, BinningRule::Fixed(num_bins))
}

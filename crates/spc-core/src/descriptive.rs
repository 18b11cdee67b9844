//! Descriptive statistics of a measurement set

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum number of measurements for which a standard deviation exists
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Divisor used for the variance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdDevConvention {
    /// Divide by `n - 1` (sample standard deviation, `s`)
    #[default]
    Sample,
    /// Divide by `n` (population standard deviation, `σ`)
    Population,
}

impl StdDevConvention {
    fn divisor(self, n: usize) -> f64 {
        match self {
            Self::Sample => (n - 1) as f64,
            Self::Population => n as f64,
        }
    }
}

/// Location and spread of a measurement set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    /// Arithmetic mean
    pub mean: f64,
    /// Standard deviation under `convention`, or as supplied by the caller
    pub std_dev: f64,
    /// Number of measurements
    pub sample_size: usize,
    /// Smallest measurement
    pub min: f64,
    /// Largest measurement
    pub max: f64,
    /// Variance divisor that produced `std_dev`; `None` once the caller has
    /// replaced `std_dev` with a known value
    pub convention: Option<StdDevConvention>,
}

impl DescriptiveSummary {
    /// True when every measurement is identical
    pub fn is_degenerate(&self) -> bool {
        self.std_dev <= 0.0
    }

    /// Observed range, `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Replace the sample mean with a known process mean
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Replace the sample standard deviation with a known process σ
    pub fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self.convention = None;
        self
    }
}

/// Reject empty, undersized or non-finite measurement sets.
pub fn validate_measurements(measurements: &[f64]) -> Result<()> {
    if measurements.len() < MIN_SAMPLE_SIZE {
        return Err(Error::insufficient(MIN_SAMPLE_SIZE, measurements.len()));
    }
    if measurements.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("measurements"));
    }
    Ok(())
}

/// Compute mean, standard deviation and range of `measurements`.
///
/// # Errors
///
/// - [`Error::InsufficientData`] for fewer than two measurements
/// - [`Error::InvalidInput`] if any measurement is NaN or infinite, or if the
///   range, mean or spread is too large to represent
///
/// # Examples
///
/// ```
/// use spc_core::{compute_summary, StdDevConvention};
///
/// let data = [9.0, 10.0, 11.0];
/// let summary = compute_summary(&data, StdDevConvention::Sample).unwrap();
/// assert_eq!(summary.mean, 10.0);
/// assert_eq!(summary.std_dev, 1.0);
/// assert_eq!(summary.sample_size, 3);
/// ```
pub fn compute_summary(
    measurements: &[f64],
    convention: StdDevConvention,
) -> Result<DescriptiveSummary> {
    validate_measurements(measurements)?;

    let n = measurements.len();
    let min = measurements.iter().copied().fold(f64::INFINITY, f64::min);
    let max = measurements.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max - min).is_finite() {
        return Err(overflow());
    }

    // Identical values: summation rounding must not leak a tiny non-zero spread
    if min == max {
        return Ok(DescriptiveSummary {
            mean: min,
            std_dev: 0.0,
            sample_size: n,
            min,
            max,
            convention: Some(convention),
        });
    }

    let mean = measurements.iter().sum::<f64>() / n as f64;
    let sum_sq = measurements.iter().fold(0.0, |acc, &x| {
        let diff = x - mean;
        acc + diff * diff
    });
    let std_dev = (sum_sq / convention.divisor(n)).sqrt();
    if !mean.is_finite() || !std_dev.is_finite() {
        return Err(overflow());
    }

    Ok(DescriptiveSummary {
        mean,
        std_dev,
        sample_size: n,
        min,
        max,
        convention: Some(convention),
    })
}

fn overflow() -> Error {
    Error::InvalidInput("measurements are too large to summarise without overflow".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_and_population_conventions() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        let population = compute_summary(&data, StdDevConvention::Population).unwrap();
        assert_eq!(population.mean, 5.0);
        assert_relative_eq!(population.std_dev, 2.0, epsilon = 1e-12);

        let sample = compute_summary(&data, StdDevConvention::Sample).unwrap();
        assert_relative_eq!(sample.std_dev, (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert!(sample.std_dev > population.std_dev);
    }

    #[test]
    fn test_range_tracking() {
        let data = [3.5, -1.0, 8.25, 0.0];
        let summary = compute_summary(&data, StdDevConvention::default()).unwrap();
        assert_eq!(summary.min, -1.0);
        assert_eq!(summary.max, 8.25);
        assert_eq!(summary.range(), 9.25);
        assert_eq!(summary.convention, Some(StdDevConvention::Sample));
    }

    #[test]
    fn test_overflowing_moments_rejected() {
        // representable values whose sum and squared deviations are not
        assert!(matches!(
            compute_summary(&[1.5e308, 1.6e308], StdDevConvention::Sample),
            Err(Error::InvalidInput(_))
        ));
        // range alone overflows
        assert!(matches!(
            compute_summary(&[-1e308, 1e308], StdDevConvention::Population),
            Err(Error::InvalidInput(_))
        ));
        // large but safe
        let summary = compute_summary(&[1e150, 2e150], StdDevConvention::Sample).unwrap();
        assert!(summary.mean.is_finite() && summary.std_dev.is_finite());
    }

    #[test]
    fn test_known_std_dev_drops_convention() {
        let summary = compute_summary(&[9.0, 10.0, 11.0], StdDevConvention::Population)
            .unwrap()
            .with_mean(10.5)
            .with_std_dev(0.25);
        assert_eq!(summary.mean, 10.5);
        assert_eq!(summary.std_dev, 0.25);
        assert_eq!(summary.convention, None);
        assert_eq!(summary.min, 9.0);
    }

    #[test]
    fn test_identical_values_are_degenerate() {
        let summary = compute_summary(&[10.0; 4], StdDevConvention::Sample).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert!(summary.is_degenerate());
    }

    #[test]
    fn test_identical_inexact_values_have_zero_spread() {
        let summary = compute_summary(&[0.1, 0.1, 0.1], StdDevConvention::Sample).unwrap();
        assert_eq!(summary.mean, 0.1);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        assert!(matches!(
            compute_summary(&[], StdDevConvention::Sample),
            Err(Error::InsufficientData { expected: 2, actual: 0 })
        ));
        assert!(matches!(
            compute_summary(&[1.0], StdDevConvention::Population),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            compute_summary(&[1.0, f64::NAN, 2.0], StdDevConvention::Sample),
            Err(Error::InvalidInput(_))
        ));
        assert!(compute_summary(&[1.0, f64::NEG_INFINITY], StdDevConvention::Sample).is_err());
    }
}

//! Configuration types for capability studies

use serde::{Deserialize, Serialize};
use spc_core::{Error, Result, StdDevConvention};
use spc_histogram::BinningRule;

/// What to do when every measurement is identical (σ == 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail with [`Error::DegenerateDistribution`]
    #[default]
    Reject,
    /// Produce a report whose σ-dependent figures are `None`
    NullIndices,
}

/// Knobs for [`analyze_with_config`](crate::analyze_with_config)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Divisor used for the standard deviation
    pub std_dev_convention: StdDevConvention,
    /// Bin-count rule for the histogram
    pub binning: BinningRule,
    /// Long-term shift added to the sigma level (1.5 for the Six Sigma convention)
    pub sigma_shift: f64,
    /// Handling of zero-spread data
    pub degenerate_policy: DegeneratePolicy,
    /// Analyse against this mean instead of the sample mean
    pub mean_override: Option<f64>,
    /// Analyse against this standard deviation instead of the sample one
    pub std_dev_override: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            std_dev_convention: StdDevConvention::Sample,
            binning: BinningRule::Sturges,
            sigma_shift: 0.0,
            degenerate_policy: DegeneratePolicy::Reject,
            mean_override: None,
            std_dev_override: None,
        }
    }
}

impl AnalysisConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the standard deviation convention
    pub fn with_std_dev_convention(mut self, convention: StdDevConvention) -> Self {
        self.std_dev_convention = convention;
        self
    }

    /// Set the histogram binning rule
    pub fn with_binning(mut self, binning: BinningRule) -> Self {
        self.binning = binning;
        self
    }

    /// Set the sigma-level shift
    pub fn with_sigma_shift(mut self, shift: f64) -> Self {
        self.sigma_shift = shift;
        self
    }

    /// Set the degenerate-distribution policy
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Use a custom process mean
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean_override = Some(mean);
        self
    }

    /// Use a custom process standard deviation
    pub fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev_override = Some(std_dev);
        self
    }

    /// Check every parameter
    pub fn validate(&self) -> Result<()> {
        self.binning.validate()?;

        if !self.sigma_shift.is_finite() || self.sigma_shift < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sigma shift must be finite and non-negative, got {}",
                self.sigma_shift
            )));
        }
        if let Some(mean) = self.mean_override {
            if !mean.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "mean override must be finite, got {mean}"
                )));
            }
        }
        if let Some(std_dev) = self.std_dev_override {
            if !std_dev.is_finite() || std_dev <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "standard deviation override must be finite and positive, got {std_dev}"
                )));
            }
        }
        Ok(())
    }
}

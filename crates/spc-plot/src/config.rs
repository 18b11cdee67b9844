//! Sampling configuration for plotted curves

use serde::{Deserialize, Serialize};
use spc_core::{Error, Result};

/// Fewest samples that still draw a line
pub const MIN_CURVE_POINTS: usize = 2;

/// How densely curves are sampled and how wide the histogram axis is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Samples of the fitted curve over the histogram axis
    pub curve_points: usize,
    /// Samples of the shaded gaussian
    pub area_points: usize,
    /// Half-width of the histogram axis in σ around the mean
    pub sigma_span: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            curve_points: 200,
            area_points: 100,
            sigma_span: 4.0,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_curve_points(mut self, points: usize) -> Self {
        self.curve_points = points;
        self
    }

    pub fn with_area_points(mut self, points: usize) -> Self {
        self.area_points = points;
        self
    }

    pub fn with_sigma_span(mut self, span: f64) -> Self {
        self.sigma_span = span;
        self
    }

    /// Check every parameter
    pub fn validate(&self) -> Result<()> {
        if self.curve_points < MIN_CURVE_POINTS || self.area_points < MIN_CURVE_POINTS {
            return Err(Error::InvalidParameter(format!(
                "curves need at least {MIN_CURVE_POINTS} points, got curve_points={} area_points={}",
                self.curve_points, self.area_points
            )));
        }
        if !self.sigma_span.is_finite() || self.sigma_span <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sigma span must be finite and positive, got {}",
                self.sigma_span
            )));
        }
        Ok(())
    }
}

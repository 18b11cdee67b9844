//! Defect-rate estimates under a normal model
//!
//! The tails beyond each specification limit are read off the normal CDF and
//! scaled to parts per million.

use serde::{Deserialize, Serialize};
use spc_core::{normal_cdf, DescriptiveSummary, Specification};

const PER_MILLION: f64 = 1_000_000.0;

/// Expected nonconformance of one study.
///
/// All fields are `None` when σ is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DefectRateEstimate {
    /// Distance from the mean down to the LSL, in σ units
    pub z_lower: Option<f64>,
    /// Distance from the mean up to the USL, in σ units
    pub z_upper: Option<f64>,
    /// Expected PPM below the LSL
    pub ppm_lower: Option<f64>,
    /// Expected PPM above the USL
    pub ppm_upper: Option<f64>,
    /// `ppm_lower + ppm_upper`
    pub ppm_total: Option<f64>,
    /// Defects per million opportunities, `ppm_total` rounded
    pub dpmo: Option<u64>,
    /// `min(|z_lower|, |z_upper|)` plus the configured shift
    pub sigma_level: Option<f64>,
    /// Expected conforming fraction
    pub yield_value: Option<f64>,
}

impl DefectRateEstimate {
    /// Percentages out of specification, if defined
    pub fn out_of_spec(&self) -> Option<OutOfSpecShare> {
        OutOfSpecShare::from_estimate(self)
    }
}

/// Estimate defect rates for `summary` against `specification`.
pub fn estimate_defect_rate(
    summary: &DescriptiveSummary,
    specification: &Specification,
    sigma_shift: f64,
) -> DefectRateEstimate {
    let sigma = summary.std_dev;
    if sigma <= 0.0 {
        return DefectRateEstimate::default();
    }

    let z_lower = (summary.mean - specification.lsl()) / sigma;
    let z_upper = (specification.usl() - summary.mean) / sigma;
    if !z_lower.is_finite() || !z_upper.is_finite() {
        return DefectRateEstimate::default();
    }

    let ppm_lower = ((1.0 - normal_cdf(z_lower)) * PER_MILLION).max(0.0);
    let ppm_upper = (normal_cdf(-z_upper) * PER_MILLION).max(0.0);
    let ppm_total = ppm_lower + ppm_upper;

    DefectRateEstimate {
        z_lower: Some(z_lower),
        z_upper: Some(z_upper),
        ppm_lower: Some(ppm_lower),
        ppm_upper: Some(ppm_upper),
        ppm_total: Some(ppm_total),
        dpmo: Some(ppm_total.round() as u64),
        sigma_level: Some(z_lower.abs().min(z_upper.abs()) + sigma_shift),
        yield_value: Some(1.0 - ppm_total / PER_MILLION),
    }
}

/// Share of output expected outside the limits, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutOfSpecShare {
    /// Percent below the LSL
    pub below_lsl: f64,
    /// Percent above the USL
    pub above_usl: f64,
    /// Percent outside either limit
    pub total: f64,
}

impl OutOfSpecShare {
    /// Percentages rounded to three decimals
    pub fn from_estimate(estimate: &DefectRateEstimate) -> Option<Self> {
        let lower = estimate.ppm_lower?;
        let upper = estimate.ppm_upper?;
        Some(Self {
            below_lsl: ppm_to_percent(lower),
            above_usl: ppm_to_percent(upper),
            total: ppm_to_percent(lower + upper),
        })
    }
}

fn ppm_to_percent(ppm: f64) -> f64 {
    (ppm / 10_000.0 * 1000.0).round() / 1000.0
}

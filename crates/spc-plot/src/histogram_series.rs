//! Histogram bars with fitted normal curves
//!
//! The fitted curve uses the report's mean and σ; the potential curve keeps
//! the same σ but is centred on the nominal, showing where the process would
//! sit if it were perfectly centred.

use crate::config::PlotConfig;
use crate::curve::{linspace, normal_curve, peak, CurvePoint};
use serde::{Deserialize, Serialize};
use spc_capability::CapabilityReport;
use spc_core::Result;

/// One histogram bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBar {
    pub left: f64,
    pub right: f64,
    pub center: f64,
    pub count: usize,
}

/// Everything a capability histogram chart draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSeries {
    pub bars: Vec<HistogramBar>,
    /// Fitted normal density over `domain`; empty when σ is zero
    pub curve: Vec<CurvePoint>,
    /// Same σ, centred on the nominal; empty when σ is zero
    pub potential_curve: Vec<CurvePoint>,
    /// Visible x range
    pub domain: (f64, f64),
    /// Multiplier that lifts densities to bar heights
    pub scale_factor: Option<f64>,
    pub mean: f64,
    pub lsl: f64,
    pub usl: f64,
    pub nominal: f64,
}

impl HistogramSeries {
    /// Fitted curve in count units
    pub fn scaled_curve(&self) -> Vec<CurvePoint> {
        self.scale(&self.curve)
    }

    /// Potential curve in count units
    pub fn scaled_potential_curve(&self) -> Vec<CurvePoint> {
        self.scale(&self.potential_curve)
    }

    fn scale(&self, curve: &[CurvePoint]) -> Vec<CurvePoint> {
        match self.scale_factor {
            Some(factor) => curve
                .iter()
                .map(|p| CurvePoint::new(p.x, p.y * factor))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Tallest bar
    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Build the histogram chart of `report`.
///
/// `measurements` widen the axis so every observation is visible; pass the
/// slice the report was computed from.
pub fn histogram_series(
    report: &CapabilityReport,
    measurements: &[f64],
    config: &PlotConfig,
) -> Result<HistogramSeries> {
    config.validate()?;

    let summary = report.summary();
    let spec = report.specification();
    let mean = summary.mean;
    let sigma = summary.std_dev;

    let (observed_min, observed_max) = if measurements.is_empty() {
        (summary.min, summary.max)
    } else {
        measurements
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    };

    let span = config.sigma_span * sigma.max(0.0);
    let domain = (
        (mean - span).min(spec.lsl()).min(observed_min),
        (mean + span).max(spec.usl()).max(observed_max),
    );

    let bars: Vec<HistogramBar> = report
        .histogram()
        .iter_bins()
        .map(|bin| HistogramBar {
            left: bin.left,
            right: bin.right,
            center: bin.center(),
            count: bin.count,
        })
        .collect();

    let (curve, potential_curve, scale_factor) = if sigma > 0.0 {
        let xs = linspace(domain.0, domain.1, config.curve_points);
        let curve = normal_curve(&xs, mean, sigma);
        let potential_curve = normal_curve(&xs, spec.nominal(), sigma);
        let max_pdf = peak(&curve);
        let max_count = report.histogram().max_count() as f64;
        let scale_factor = (max_pdf > 0.0).then(|| max_count / max_pdf);
        (curve, potential_curve, scale_factor)
    } else {
        (Vec::new(), Vec::new(), None)
    };

    Ok(HistogramSeries {
        bars,
        curve,
        potential_curve,
        domain,
        scale_factor,
        mean,
        lsl: spec.lsl(),
        usl: spec.usl(),
        nominal: spec.nominal(),
    })
}

//! Normal curve split into the regions below, within and above the limits
//!
//! The sample grid always contains the limits themselves, so the shaded
//! regions meet exactly at LSL and USL.

use crate::config::PlotConfig;
use crate::curve::{linspace, normal_curve, CurvePoint};
use serde::{Deserialize, Serialize};
use spc_capability::CapabilityReport;
use spc_core::{Error, Result, Specification};

/// Half-width of the gaussian axis in σ around the mean
pub const AREA_SIGMA_SPAN: f64 = 3.0;

/// Normal curve partitioned by the specification limits
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GaussianAreaSeries {
    /// Whole curve
    pub curve: Vec<CurvePoint>,
    /// `x <= lsl`
    pub below_lsl: Vec<CurvePoint>,
    /// `lsl <= x <= usl`
    pub within_spec: Vec<CurvePoint>,
    /// `x >= usl`
    pub above_usl: Vec<CurvePoint>,
    /// Visible x range; `None` when there is no curve
    pub domain: Option<(f64, f64)>,
}

impl GaussianAreaSeries {
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }
}

/// Sample `N(mean, std_dev²)` and partition it at `lsl` and `usl`.
///
/// A non-positive `std_dev` yields empty series.
///
/// # Errors
/// [`Error::InvalidSpecification`] for unordered or non-finite limits and
/// [`Error::InvalidInput`] for a non-finite mean or standard deviation.
pub fn gaussian_area_series(
    mean: f64,
    std_dev: f64,
    lsl: f64,
    usl: f64,
    config: &PlotConfig,
) -> Result<GaussianAreaSeries> {
    config.validate()?;
    Specification::new(lsl, usl)?;
    if !mean.is_finite() || !std_dev.is_finite() {
        return Err(Error::non_finite("gaussian mean and standard deviation"));
    }
    if std_dev <= 0.0 {
        return Ok(GaussianAreaSeries::default());
    }

    let start = lsl.min(mean - AREA_SIGMA_SPAN * std_dev);
    let end = usl.max(mean + AREA_SIGMA_SPAN * std_dev);

    let mut xs = linspace(start, end, config.area_points);
    xs.extend([lsl, usl]);
    xs.sort_by(f64::total_cmp);
    xs.dedup();

    let curve = normal_curve(&xs, mean, std_dev);
    let below_lsl = curve.iter().copied().filter(|p| p.x <= lsl).collect();
    let above_usl = curve.iter().copied().filter(|p| p.x >= usl).collect();
    let within_spec = curve
        .iter()
        .copied()
        .filter(|p| p.x >= lsl && p.x <= usl)
        .collect();

    Ok(GaussianAreaSeries {
        curve,
        below_lsl,
        within_spec,
        above_usl,
        domain: Some((start, end)),
    })
}

/// [`gaussian_area_series`] for the mean, σ and limits of a report
pub fn gaussian_area_for_report(
    report: &CapabilityReport,
    config: &PlotConfig,
) -> Result<GaussianAreaSeries> {
    let spec = report.specification();
    gaussian_area_series(report.mean(), report.std_dev(), spec.lsl(), spec.usl(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_meets_at_limits() {
        let series = gaussian_area_series(10.0, 1.0, 8.5, 11.0, &PlotConfig::default()).unwrap();

        assert_eq!(series.domain, Some((7.0, 13.0)));
        assert_eq!(series.below_lsl.last().unwrap().x, 8.5);
        assert_eq!(series.within_spec.first().unwrap().x, 8.5);
        assert_eq!(series.within_spec.last().unwrap().x, 11.0);
        assert_eq!(series.above_usl.first().unwrap().x, 11.0);
        assert!(series.below_lsl.iter().all(|p| p.x <= 8.5));
        assert!(series.above_usl.iter().all(|p| p.x >= 11.0));
        assert!(series.curve.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_wide_limits_stretch_the_domain() {
        let series = gaussian_area_series(0.0, 1.0, -10.0, 2.0, &PlotConfig::default()).unwrap();
        assert_eq!(series.domain, Some((-10.0, 3.0)));
        assert_eq!(series.below_lsl.len(), 1);
    }

    #[test]
    fn test_zero_sigma_is_empty() {
        let series = gaussian_area_series(10.0, 0.0, 5.0, 15.0, &PlotConfig::default()).unwrap();
        assert!(series.is_empty());
        assert!(series.below_lsl.is_empty());
        assert!(series.within_spec.is_empty());
        assert!(series.above_usl.is_empty());
        assert_eq!(series.domain, None);

        let json = serde_json::to_value(&series).unwrap();
        assert!(json["domain"].is_null());
        assert_eq!(json["curve"], serde_json::json!([]));
    }

    #[test]
    fn test_rejects_bad_limits() {
        assert!(matches!(
            gaussian_area_series(10.0, 1.0, 12.0, 8.0, &PlotConfig::default()),
            Err(Error::InvalidSpecification(_))
        ));
        assert!(matches!(
            gaussian_area_series(f64::NAN, 1.0, 8.0, 12.0, &PlotConfig::default()),
            Err(Error::InvalidInput(_))
        ));
    }
}

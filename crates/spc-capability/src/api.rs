//! High-level API for capability studies
//!
//! [`analyze`] covers the common case; [`analyze_with_config`] exposes the
//! standard deviation convention, binning rule, sigma shift and the handling
//! of zero-spread data.

use crate::config::{AnalysisConfig, DegeneratePolicy};
use crate::defect_rate::estimate_defect_rate;
use crate::indices::compute_indices;
use crate::report::CapabilityReport;
use spc_core::{compute_summary, Error, Result, Specification};
use spc_histogram::build_histogram;
use tracing::{debug, instrument, warn};

/// Run a capability study with the default configuration
///
/// # Example
/// ```rust
/// use spc_capability::analyze;
/// use spc_core::Specification;
///
/// let measurements = vec![9.0, 10.0, 11.0];
/// let spec = Specification::new(7.0, 13.0).unwrap();
///
/// let report = analyze(&measurements, &spec).unwrap();
/// assert_eq!(report.indices().cp, Some(1.0));
/// assert_eq!(report.defect_rate().dpmo, Some(2700));
/// ```
pub fn analyze(measurements: &[f64], specification: &Specification) -> Result<CapabilityReport> {
    analyze_with_config(measurements, specification, &AnalysisConfig::default())
}

/// Run a capability study
///
/// # Errors
/// * [`Error::InsufficientData`] for fewer than two measurements
/// * [`Error::InvalidInput`] for non-finite measurements
/// * [`Error::InvalidParameter`] for an invalid configuration
/// * [`Error::DegenerateDistribution`] when σ is zero under
///   [`DegeneratePolicy::Reject`]
#[instrument(
    skip_all,
    fields(n = measurements.len(), lsl = specification.lsl(), usl = specification.usl())
)]
pub fn analyze_with_config(
    measurements: &[f64],
    specification: &Specification,
    config: &AnalysisConfig,
) -> Result<CapabilityReport> {
    config.validate()?;

    let mut summary = compute_summary(measurements, config.std_dev_convention)?;
    if let Some(mean) = config.mean_override {
        summary = summary.with_mean(mean);
    }
    if let Some(std_dev) = config.std_dev_override {
        summary = summary.with_std_dev(std_dev);
    }
    debug!(
        "Summary: mean={:.6}, std_dev={:.6}, range=[{}, {}]",
        summary.mean, summary.std_dev, summary.min, summary.max
    );

    // Zero σ survives only without an override, so every measurement is `min`
    if summary.is_degenerate() {
        match config.degenerate_policy {
            DegeneratePolicy::Reject => {
                return Err(Error::DegenerateDistribution { value: summary.min })
            }
            DegeneratePolicy::NullIndices => {
                warn!(
                    "All {} measurements equal {}; sigma-dependent figures are undefined",
                    summary.sample_size, summary.min
                );
            }
        }
    }

    let histogram = build_histogram(measurements, config.binning)?;
    let indices = compute_indices(&summary, specification);
    debug!(
        "Indices: cp={:?}, cpk={:?}, cpm={:?}, k={:?}",
        indices.cp, indices.cpk, indices.cpm, indices.k
    );

    let defect_rate = estimate_defect_rate(&summary, specification, config.sigma_shift);
    debug!(
        "Defect rate: ppm_total={:?}, sigma_level={:?}",
        defect_rate.ppm_total, defect_rate.sigma_level
    );

    Ok(CapabilityReport::new(
        *specification,
        summary,
        histogram,
        indices,
        defect_rate,
    ))
}

//! Process capability indices
//!
//! Every index that divides by σ is `None` when σ is not positive, so
//! undefined values never surface as NaN or infinity.

use serde::{Deserialize, Serialize};
use spc_core::{DescriptiveSummary, Specification};

/// Capability indices of one study
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CapabilityIndices {
    /// Potential capability, `(usl - lsl) / 6σ`
    pub cp: Option<f64>,
    /// Actual capability, `min(cpu, cpl)`
    pub cpk: Option<f64>,
    /// Lower one-sided capability, `(mean - lsl) / 3σ`
    pub cpl: Option<f64>,
    /// Upper one-sided capability, `(usl - mean) / 3σ`
    pub cpu: Option<f64>,
    /// Taguchi capability against the nominal
    pub cpm: Option<f64>,
    /// Off-centre percentage of the half tolerance
    pub k: Option<f64>,
    /// Capability ratio, `1 / cp`
    pub cr: Option<f64>,
}

impl CapabilityIndices {
    /// True when no σ-dependent index could be computed
    pub fn is_undefined(&self) -> bool {
        self.cp.is_none() && self.cpk.is_none()
    }
}

/// Compute all indices from a summary and a specification.
pub fn compute_indices(
    summary: &DescriptiveSummary,
    specification: &Specification,
) -> CapabilityIndices {
    let mean = summary.mean;
    let sigma = summary.std_dev;
    let lsl = specification.lsl();
    let usl = specification.usl();
    let tolerance = specification.tolerance();

    let half_tolerance = tolerance / 2.0;
    let k = finite((mean - specification.midpoint()).abs() / half_tolerance * 100.0);

    let offset = mean - specification.nominal();
    let cpm_denominator = 6.0 * (sigma * sigma + offset * offset).sqrt();
    let cpm = finite_ratio(tolerance, cpm_denominator);

    if sigma <= 0.0 {
        return CapabilityIndices {
            k,
            cpm,
            ..CapabilityIndices::default()
        };
    }

    let cp = tolerance / (6.0 * sigma);
    let cpu = (usl - mean) / (3.0 * sigma);
    let cpl = (mean - lsl) / (3.0 * sigma);
    // min(cpu, cpl) never exceeds cp; clamp away rounding
    let cpk = cpu.min(cpl).min(cp);

    CapabilityIndices {
        cp: finite(cp),
        cpk: finite(cpk),
        cpl: finite(cpl),
        cpu: finite(cpu),
        cpm,
        k,
        cr: finite_ratio(1.0, cp),
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn finite_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        finite(numerator / denominator)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use spc_core::StdDevConvention;

    fn summary(mean: f64, std_dev: f64) -> DescriptiveSummary {
        DescriptiveSummary {
            mean,
            std_dev,
            sample_size: 30,
            min: mean - 3.0 * std_dev,
            max: mean + 3.0 * std_dev,
            convention: Some(StdDevConvention::Sample),
        }
    }

    #[test]
    fn test_centered_process() {
        let spec = Specification::new(7.0, 13.0).unwrap();
        let indices = compute_indices(&summary(10.0, 1.0), &spec);

        assert_eq!(indices.cp, Some(1.0));
        assert_eq!(indices.cpk, Some(1.0));
        assert_eq!(indices.cpu, Some(1.0));
        assert_eq!(indices.cpl, Some(1.0));
        assert_eq!(indices.k, Some(0.0));
        assert_eq!(indices.cpm, Some(1.0));
        assert_eq!(indices.cr, Some(1.0));
    }

    #[test]
    fn test_shifted_process() {
        let spec = Specification::new(7.0, 13.0).unwrap();
        let indices = compute_indices(&summary(11.0, 1.0), &spec);

        assert_relative_eq!(indices.cpu.unwrap(), 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(indices.cpl.unwrap(), 4.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(indices.cpk.unwrap(), 2.0 / 3.0, epsilon = 1e-12);
        assert!(indices.cpk.unwrap() < indices.cp.unwrap());
        // |11 - 10| / 3 * 100
        assert_relative_eq!(indices.k.unwrap(), 100.0 / 3.0, epsilon = 1e-12);
        // 6 / (6 * sqrt(1 + 1))
        assert_relative_eq!(indices.cpm.unwrap(), 1.0 / 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_mean_outside_limits_gives_negative_cpk() {
        let spec = Specification::new(7.0, 13.0).unwrap();
        let indices = compute_indices(&summary(14.0, 1.0), &spec);
        assert!(indices.cpu.unwrap() < 0.0);
        assert_eq!(indices.cpk, indices.cpu);
        assert!(indices.k.unwrap() > 100.0);
    }

    #[test]
    fn test_explicit_nominal_drives_cpm_only() {
        let spec = Specification::new(7.0, 13.0)
            .unwrap()
            .with_nominal(9.0)
            .unwrap();
        let indices = compute_indices(&summary(10.0, 1.0), &spec);
        assert_eq!(indices.k, Some(0.0));
        assert_relative_eq!(indices.cpm.unwrap(), 1.0 / 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_sigma_leaves_indices_undefined() {
        let spec = Specification::new(5.0, 15.0).unwrap();
        let indices = compute_indices(&summary(10.0, 0.0), &spec);

        assert!(indices.is_undefined());
        assert_eq!(indices.cpl, None);
        assert_eq!(indices.cpu, None);
        assert_eq!(indices.cr, None);
        assert_eq!(indices.cpm, None);
        assert_eq!(indices.k, Some(0.0));
    }

    #[test]
    fn test_zero_sigma_off_nominal_keeps_cpm() {
        let spec = Specification::new(5.0, 15.0).unwrap();
        let indices = compute_indices(&summary(12.0, 0.0), &spec);
        assert_eq!(indices.cp, None);
        // 10 / (6 * 2)
        assert_relative_eq!(indices.cpm.unwrap(), 10.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(indices.k.unwrap(), 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_overflowing_indices_are_none() {
        // a far-off mean over a tiny tolerance overflows K and Cpm
        let spec = Specification::new(0.0, 1e-300).unwrap();
        let indices = compute_indices(&summary(1e10, 1.0), &spec);
        assert_eq!(indices.k, None);
        assert_eq!(indices.cpm.map(f64::is_finite), Some(true));
        assert!([indices.cp, indices.cpk, indices.cpl, indices.cpu, indices.cr]
            .iter()
            .flatten()
            .all(|v| v.is_finite()));
    }
}

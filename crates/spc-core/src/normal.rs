//! Normal distribution primitives
//!
//! The error function uses the Abramowitz & Stegun formula 7.1.26 rational
//! approximation. Its maximum absolute error is about 1.5e-7, which is well
//! below the resolution of any reported capability figure. The coefficients
//! are fixed so that reported PPM and DPMO values stay reproducible.
//!
//! # References
//!
//! - Abramowitz & Stegun (1964), *Handbook of Mathematical Functions*, 7.1.26.

use std::f64::consts::{PI, SQRT_2};

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Maximum absolute error of [`erf`] against the exact error function
pub const ERF_MAX_ABS_ERROR: f64 = 1.5e-7;

/// Error function approximation.
///
/// Odd: the polynomial is evaluated on `|x|` and the sign is restored
/// afterwards. `erf(0)` is exactly zero.
///
/// # Examples
///
/// ```
/// use spc_core::normal::erf;
///
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.842_700_79).abs() < 1.5e-7);
/// assert_eq!(erf(-0.5), -erf(0.5));
/// ```
pub fn erf(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal cumulative distribution function, `Φ(z)`.
///
/// # Examples
///
/// ```
/// use spc_core::normal::normal_cdf;
///
/// assert_eq!(normal_cdf(0.0), 0.5);
/// assert!((normal_cdf(3.0) - 0.998_650_1).abs() < 1e-6);
/// ```
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Density of `N(mean, std_dev²)` at `x`.
///
/// Returns 0 for a non-positive `std_dev`; a zero-width distribution has no
/// finite density to plot.
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let exponent = -((x - mean) * (x - mean)) / (2.0 * std_dev * std_dev);
    let coefficient = 1.0 / (std_dev * (2.0 * PI).sqrt());
    coefficient * exponent.exp()
}

/// Density of the standard normal distribution at `z`.
pub fn standard_normal_pdf(z: f64) -> f64 {
    normal_pdf(z, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_cdf_at_zero_is_one_half() {
        assert_eq!(normal_cdf(0.0), 0.5);
        assert_eq!(normal_cdf(-0.0), 0.5);
    }

    #[test]
    fn test_erf_matches_reference() {
        for &x in &[0.1, 0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 4.5] {
            let reference = statrs::function::erf::erf(x);
            assert_abs_diff_eq!(erf(x), reference, epsilon = ERF_MAX_ABS_ERROR);
            assert_abs_diff_eq!(erf(-x), -reference, epsilon = ERF_MAX_ABS_ERROR);
        }
    }

    #[test]
    fn test_cdf_reference_table() {
        // Standard normal table values
        let table = [
            (-3.0, 0.001_349_9),
            (-2.0, 0.022_750_1),
            (-1.0, 0.158_655_3),
            (1.0, 0.841_344_7),
            (1.96, 0.975_002_1),
            (3.0, 0.998_650_1),
        ];
        for (z, expected) in table {
            assert_abs_diff_eq!(normal_cdf(z), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cdf_saturates_in_tails() {
        assert!(normal_cdf(10.0) <= 1.0);
        assert!(normal_cdf(-10.0) >= 0.0);
        assert_abs_diff_eq!(normal_cdf(10.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normal_cdf(-10.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pdf_guards_non_positive_std_dev() {
        assert_eq!(normal_pdf(1.0, 1.0, 0.0), 0.0);
        assert_eq!(normal_pdf(1.0, 1.0, -2.0), 0.0);
    }

    #[test]
    fn test_pdf_peak_and_symmetry() {
        let peak = 1.0 / (2.0 * PI).sqrt();
        assert_abs_diff_eq!(standard_normal_pdf(0.0), peak, epsilon = 1e-15);
        assert_abs_diff_eq!(normal_pdf(10.0, 10.0, 2.0), peak / 2.0, epsilon = 1e-15);
        assert_eq!(normal_pdf(8.5, 10.0, 1.0), normal_pdf(11.5, 10.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_erf_is_odd(x in -8.0f64..8.0) {
            prop_assert_eq!(erf(-x), -erf(x));
        }

        #[test]
        fn prop_erf_is_bounded(x in -50.0f64..50.0) {
            let y = erf(x);
            prop_assert!((-1.0..=1.0).contains(&y));
        }

        #[test]
        fn prop_cdf_is_monotone(a in -4.0f64..4.0, delta in 0.01f64..1.0) {
            prop_assert!(normal_cdf(a + delta) >= normal_cdf(a));
        }
    }
}

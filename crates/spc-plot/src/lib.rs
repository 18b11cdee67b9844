//! Chart-ready series for capability studies
//!
//! Pure adapters from a [`CapabilityReport`](spc_capability::CapabilityReport)
//! to the data a chart draws: histogram bars with fitted and potential normal
//! curves, a run chart of individual measurements against the limits, and a
//! normal curve split into the regions below, within and above the
//! specification. Nothing here recomputes statistics; every mean and σ comes
//! from the report.
//!
//! # Examples
//!
//! ```rust
//! use spc_capability::analyze;
//! use spc_core::Specification;
//! use spc_plot::{control_series, gaussian_area_for_report, histogram_series, PlotConfig};
//!
//! let data = vec![9.6, 10.2, 10.0, 9.9, 10.4, 10.1, 9.8, 10.0];
//! let spec = Specification::new(9.0, 11.0).unwrap();
//! let report = analyze(&data, &spec).unwrap();
//! let config = PlotConfig::default();
//!
//! let histogram = histogram_series(&report, &data, &config).unwrap();
//! let control = control_series(&data, report.specification(), report.summary());
//! let areas = gaussian_area_for_report(&report, &config).unwrap();
//!
//! assert_eq!(histogram.curve.len(), config.curve_points);
//! assert_eq!(control.out_of_spec_count, 0);
//! assert!(!areas.within_spec.is_empty());
//! ```

pub mod axis;
pub mod config;
pub mod control;
pub mod curve;
pub mod gaussian;
pub mod histogram_series;

// Re-exports
pub use axis::{axis_decimals, format_tick};
pub use config::PlotConfig;
pub use control::{control_series, ControlPoint, ControlSeries};
pub use curve::CurvePoint;
pub use gaussian::{gaussian_area_for_report, gaussian_area_series, GaussianAreaSeries};
pub use histogram_series::{histogram_series, HistogramBar, HistogramSeries};

//! Statistical process control toolkit
//!
//! Umbrella crate re-exporting the spc-* workspace:
//!
//! - [`spc_core`]: error type, specification, descriptive statistics, normal primitives
//! - [`spc_histogram`]: equal-width binning rules
//! - [`spc_capability`]: capability indices, defect rates and the capability report
//! - [`spc_plot`]: chart-ready series derived from a report
//!
//! # Examples
//!
//! ```rust
//! use spc_stats::prelude::*;
//!
//! let data = vec![10.2, 9.9, 10.1, 9.8, 10.0, 10.3, 9.7, 10.0, 10.1, 9.9];
//! let spec = Specification::new(9.0, 11.0).unwrap();
//!
//! let report = analyze(&data, &spec).unwrap();
//! println!("{report}");
//!
//! let chart = histogram_series(&report, &data, &PlotConfig::default()).unwrap();
//! assert_eq!(chart.bars.iter().map(|b| b.count).sum::<usize>(), data.len());
//! ```

pub use spc_capability;
pub use spc_core;
pub use spc_histogram;
pub use spc_plot;

pub use spc_capability::{
    analyze, analyze_with_config, AnalysisConfig, CapabilityReport, DegeneratePolicy, WireReport,
};
pub use spc_core::{Error, Result, Specification, StdDevConvention};
pub use spc_histogram::BinningRule;
pub use spc_plot::{control_series, gaussian_area_series, histogram_series, PlotConfig};

/// Version of the umbrella crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use spc_capability::{
        analyze, analyze_with_config, AnalysisConfig, CapabilityReport, DegeneratePolicy,
        Interpretation, Tier,
    };
    pub use spc_core::prelude::*;
    pub use spc_histogram::BinningRule;
    pub use spc_plot::{
        control_series, gaussian_area_for_report, gaussian_area_series, histogram_series,
        PlotConfig,
    };
}

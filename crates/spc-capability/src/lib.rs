//! Process capability analysis
//!
//! Turns a set of measurements and a two-sided specification into a
//! [`CapabilityReport`]: descriptive summary, histogram, capability indices
//! (Cp, Cpk, Cpl, Cpu, Cpm, K, CR), normal-model defect rates (PPM, DPMO,
//! sigma level, yield) and a qualitative band for each figure.
//!
//! # Examples
//!
//! ```rust
//! use spc_capability::{analyze_with_config, AnalysisConfig, Tier};
//! use spc_core::Specification;
//!
//! let measurements = vec![10.1, 9.8, 10.0, 10.3, 9.9, 10.2, 9.7, 10.0, 10.1, 9.9];
//! let spec = Specification::new(9.0, 11.0).unwrap();
//! let config = AnalysisConfig::default().with_sigma_shift(1.5);
//!
//! let report = analyze_with_config(&measurements, &spec, &config).unwrap();
//! if let Some(cpk) = report.interpretations().cpk {
//!     println!("Cpk: {} ({})", cpk.label, cpk.tier.name());
//!     assert_ne!(cpk.tier, Tier::Failure);
//! }
//!
//! let json = report.to_wire().to_json().unwrap();
//! assert!(json.contains("\"input_data\""));
//! ```

pub mod api;
pub mod config;
pub mod defect_rate;
pub mod indices;
pub mod interpretation;
pub mod report;
pub mod wire;

// Re-exports
pub use api::{analyze, analyze_with_config};
pub use config::{AnalysisConfig, DegeneratePolicy};
pub use defect_rate::{estimate_defect_rate, DefectRateEstimate, OutOfSpecShare};
pub use indices::{compute_indices, CapabilityIndices};
pub use interpretation::{
    BandTable, Comparison, Interpretation, Interpretations, Tier, CAPABILITY_BANDS,
    CENTERING_BANDS, DPMO_BANDS, PPM_BANDS, SIGMA_BANDS, TARGET_BANDS,
};
pub use report::CapabilityReport;
pub use wire::{WireInputData, WireReport, WireResults};

pub use spc_core::{Error, Result};

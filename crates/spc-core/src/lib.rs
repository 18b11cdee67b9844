//! Core types and numeric primitives for SPC capability analysis
//!
//! This crate holds everything the other spc-* crates share: the unified
//! error type, the two-sided [`Specification`], descriptive statistics of a
//! measurement set, and the normal-distribution primitives used for defect
//! rate estimation and curve plotting.
//!
//! All functions are pure. Nothing here logs, caches or allocates beyond the
//! values it returns.
//!
//! # Example
//!
//! ```rust
//! use spc_core::{compute_summary, normal::normal_cdf, Specification, StdDevConvention};
//!
//! let spec = Specification::new(7.0, 13.0).unwrap();
//! let data = vec![9.0, 10.0, 11.0, 10.0, 9.5, 10.5];
//! let summary = compute_summary(&data, StdDevConvention::Sample).unwrap();
//!
//! let z_upper = (spec.usl() - summary.mean) / summary.std_dev;
//! let above = normal_cdf(-z_upper);
//! println!("P(x > USL) = {above:.6}");
//! ```

pub mod descriptive;
pub mod error;
pub mod normal;
pub mod specification;

// Re-export core types
pub use descriptive::{
    compute_summary, validate_measurements, DescriptiveSummary, StdDevConvention, MIN_SAMPLE_SIZE,
};
pub use error::{Error, Result};
pub use normal::{erf, normal_cdf, normal_pdf, standard_normal_pdf};
pub use specification::Specification;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{
        compute_summary, DescriptiveSummary, Result, Specification, StdDevConvention,
    };
}

//! Error types for capability analysis
//!
//! Provides a unified error type for all spc-* crates.

use thiserror::Error;

/// Core error type for SPC capability operations
#[derive(Error, Debug)]
pub enum Error {
    /// Not enough measurements for the requested statistic
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Specification limits are inconsistent or non-finite
    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    /// Every measurement is identical, so the spread is zero
    #[error("Degenerate distribution: all measurements equal {value}, standard deviation is zero")]
    DegenerateDistribution { value: f64 },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample that is too small
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error is a consequence of the input data rather than
    /// of the caller's configuration
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::DegenerateDistribution { .. } | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 2 samples, got 1");

        let err = Error::InvalidSpecification("LSL must be below USL".to_string());
        assert_eq!(err.to_string(), "Invalid specification: LSL must be below USL");

        let err = Error::DegenerateDistribution { value: 10.0 };
        assert_eq!(
            err.to_string(),
            "Degenerate distribution: all measurements equal 10, standard deviation is zero"
        );

        let err = Error::InvalidParameter("bin count must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: bin count must be positive");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::insufficient(2, 0) {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::non_finite("measurements");
        assert_eq!(err.to_string(), "Invalid input: measurements contains NaN or infinite values");
    }

    #[test]
    fn test_data_error_classification() {
        assert!(Error::insufficient(2, 1).is_data_error());
        assert!(Error::DegenerateDistribution { value: 1.0 }.is_data_error());
        assert!(Error::non_finite("x").is_data_error());
        assert!(!Error::InvalidSpecification("x".into()).is_data_error());
        assert!(!Error::InvalidParameter("x".into()).is_data_error());
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("upstream parser failed").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("upstream parser failed")),
            _ => panic!("Wrong error type"),
        }
    }
}

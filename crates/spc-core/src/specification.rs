//! Engineering specification limits

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Two-sided specification for a critical-to-quality characteristic.
///
/// `tolerance` and `midpoint` are derived from the limits and cannot be set
/// independently. The nominal defaults to the midpoint.
///
/// # Examples
///
/// ```
/// use spc_core::Specification;
///
/// let spec = Specification::new(7.0, 13.0).unwrap();
/// assert_eq!(spec.tolerance(), 6.0);
/// assert_eq!(spec.nominal(), 10.0);
///
/// let spec = spec.with_nominal(11.0).unwrap();
/// assert_eq!(spec.midpoint(), 10.0);
/// assert_eq!(spec.nominal(), 11.0);
///
/// assert!(Specification::new(13.0, 7.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpecification", into = "RawSpecification")]
pub struct Specification {
    lsl: f64,
    usl: f64,
    nominal: Option<f64>,
}

impl Specification {
    /// Create a specification from lower and upper limits.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSpecification`] if either limit is non-finite or
    /// `lsl >= usl`.
    pub fn new(lsl: f64, usl: f64) -> Result<Self> {
        if !lsl.is_finite() {
            return Err(Error::InvalidSpecification("LSL must be finite".to_string()));
        }
        if !usl.is_finite() {
            return Err(Error::InvalidSpecification("USL must be finite".to_string()));
        }
        if lsl >= usl {
            return Err(Error::InvalidSpecification(format!(
                "LSL ({lsl}) must be below USL ({usl})"
            )));
        }
        Ok(Self {
            lsl,
            usl,
            nominal: None,
        })
    }

    /// Set an explicit nominal (target) value.
    ///
    /// A nominal outside the limits is allowed; Cpm penalises the offset.
    pub fn with_nominal(mut self, nominal: f64) -> Result<Self> {
        if !nominal.is_finite() {
            return Err(Error::InvalidSpecification("nominal must be finite".to_string()));
        }
        self.nominal = Some(nominal);
        Ok(self)
    }

    /// Lower specification limit
    pub fn lsl(&self) -> f64 {
        self.lsl
    }

    /// Upper specification limit
    pub fn usl(&self) -> f64 {
        self.usl
    }

    /// Target value; the midpoint unless set explicitly
    pub fn nominal(&self) -> f64 {
        self.nominal.unwrap_or_else(|| self.midpoint())
    }

    /// Whether the nominal was given rather than derived
    pub fn has_explicit_nominal(&self) -> bool {
        self.nominal.is_some()
    }

    /// `usl - lsl`
    pub fn tolerance(&self) -> f64 {
        self.usl - self.lsl
    }

    /// `(lsl + usl) / 2`
    pub fn midpoint(&self) -> f64 {
        (self.lsl + self.usl) / 2.0
    }

    /// Whether a single measurement conforms, limits inclusive
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lsl && value <= self.usl
    }
}

/// Serialized form, validated on the way in
#[derive(Serialize, Deserialize)]
struct RawSpecification {
    lsl: f64,
    usl: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nominal: Option<f64>,
}

impl TryFrom<RawSpecification> for Specification {
    type Error = Error;

    fn try_from(raw: RawSpecification) -> Result<Self> {
        let spec = Specification::new(raw.lsl, raw.usl)?;
        match raw.nominal {
            Some(nominal) => spec.with_nominal(nominal),
            None => Ok(spec),
        }
    }
}

impl From<Specification> for RawSpecification {
    fn from(spec: Specification) -> Self {
        Self {
            lsl: spec.lsl,
            usl: spec.usl,
            nominal: spec.nominal,
        }
    }
}

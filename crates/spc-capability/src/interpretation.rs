//! Qualitative bands for capability and defect-rate figures
//!
//! Every classification is an ordered table of `(threshold, band)` pairs
//! evaluated top-down; the first threshold the value satisfies wins and the
//! table's fallback applies otherwise. Keeping the thresholds in tables means
//! the UI and the tests read exactly the same numbers.

use crate::defect_rate::DefectRateEstimate;
use crate::indices::CapabilityIndices;
use serde::Serialize;
use std::fmt;

/// Traffic-light severity of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Meets the usual quality target
    Success,
    /// Acceptable with reservations
    Warning,
    /// Below target
    Failure,
}

impl Tier {
    /// Lower-case name, as used by rendering layers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Failure => "failure",
        }
    }
}

/// A qualitative reading of one figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interpretation {
    /// Human-readable band name
    pub label: &'static str,
    /// Severity of the band
    pub tier: Tier,
}

impl Interpretation {
    const fn new(label: &'static str, tier: Tier) -> Self {
        Self { label, tier }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.tier.name())
    }
}

/// How a value is compared against each threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `value >= threshold`
    AtLeast,
    /// `value < threshold`
    Below,
    /// `value <= threshold`
    AtMost,
}

impl Comparison {
    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::AtLeast => value >= threshold,
            Self::Below => value < threshold,
            Self::AtMost => value <= threshold,
        }
    }
}

/// Ordered threshold table
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    comparison: Comparison,
    bands: &'static [(f64, Interpretation)],
    fallback: Interpretation,
}

impl BandTable {
    /// Band for `value`
    pub fn classify(&self, value: f64) -> Interpretation {
        self.bands
            .iter()
            .find(|(threshold, _)| self.comparison.holds(value, *threshold))
            .map(|(_, band)| *band)
            .unwrap_or(self.fallback)
    }

    /// Band for an optional value; `None` stays `None` ("N/A")
    pub fn classify_opt(&self, value: Option<f64>) -> Option<Interpretation> {
        value.map(|v| self.classify(v))
    }

    /// Thresholds in evaluation order
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands.iter().map(|(threshold, _)| *threshold)
    }
}

/// Cp, Cpk, Cpl and Cpu
pub const CAPABILITY_BANDS: BandTable = BandTable {
    comparison: Comparison::AtLeast,
    bands: &[
        (1.33, Interpretation::new("Adequate", Tier::Success)),
        (1.00, Interpretation::new("Partially Capable", Tier::Warning)),
    ],
    fallback: Interpretation::new("Not Capable", Tier::Failure),
};

/// K, percent off-centre
pub const CENTERING_BANDS: BandTable = BandTable {
    comparison: Comparison::Below,
    bands: &[
        (10.0, Interpretation::new("Adequately Centered", Tier::Success)),
        (20.0, Interpretation::new("Acceptably Centered", Tier::Warning)),
    ],
    fallback: Interpretation::new("Inadequately Centered", Tier::Failure),
};

/// Cpm, against the nominal
pub const TARGET_BANDS: BandTable = BandTable {
    comparison: Comparison::AtLeast,
    bands: &[
        (1.33, Interpretation::new("Meets Target", Tier::Success)),
        (1.00, Interpretation::new("Partially Meets Target", Tier::Warning)),
    ],
    fallback: Interpretation::new("Does Not Meet Target", Tier::Failure),
};

/// Defects per million opportunities
pub const DPMO_BANDS: BandTable = BandTable {
    comparison: Comparison::AtMost,
    bands: &[
        (3400.0, Interpretation::new("Low Defect Rate", Tier::Success)),
        (66800.0, Interpretation::new("Moderate Defect Rate", Tier::Warning)),
    ],
    fallback: Interpretation::new("High Defect Rate", Tier::Failure),
};

/// Sigma level
pub const SIGMA_BANDS: BandTable = BandTable {
    comparison: Comparison::AtLeast,
    bands: &[
        (4.5, Interpretation::new("High Sigma", Tier::Success)),
        (3.0, Interpretation::new("Medium Sigma", Tier::Warning)),
    ],
    fallback: Interpretation::new("Low Sigma", Tier::Failure),
};

/// Total PPM out of specification
pub const PPM_BANDS: BandTable = BandTable {
    comparison: Comparison::Below,
    bands: &[
        (1000.0, Interpretation::new("Excellent", Tier::Success)),
        (10000.0, Interpretation::new("Good", Tier::Warning)),
    ],
    fallback: Interpretation::new("Requires Improvement", Tier::Failure),
};

/// Interpretation of every reported figure.
///
/// A field is `None` exactly when the underlying figure is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Interpretations {
    pub cp: Option<Interpretation>,
    pub cpk: Option<Interpretation>,
    pub cpl: Option<Interpretation>,
    pub cpu: Option<Interpretation>,
    pub cpm: Option<Interpretation>,
    pub k: Option<Interpretation>,
    /// CR is the reciprocal of Cp and reads through the Cp bands
    pub cr: Option<Interpretation>,
    pub dpmo: Option<Interpretation>,
    pub sigma: Option<Interpretation>,
    pub ppm: Option<Interpretation>,
}

impl Interpretations {
    /// Classify all figures of a study
    pub fn classify(indices: &CapabilityIndices, defect_rate: &DefectRateEstimate) -> Self {
        Self {
            cp: CAPABILITY_BANDS.classify_opt(indices.cp),
            cpk: CAPABILITY_BANDS.classify_opt(indices.cpk),
            cpl: CAPABILITY_BANDS.classify_opt(indices.cpl),
            cpu: CAPABILITY_BANDS.classify_opt(indices.cpu),
            cpm: TARGET_BANDS.classify_opt(indices.cpm),
            k: CENTERING_BANDS.classify_opt(indices.k),
            cr: indices.cr.and(CAPABILITY_BANDS.classify_opt(indices.cp)),
            dpmo: DPMO_BANDS.classify_opt(defect_rate.dpmo.map(|d| d as f64)),
            sigma: SIGMA_BANDS.classify_opt(defect_rate.sigma_level),
            ppm: PPM_BANDS.classify_opt(defect_rate.ppm_total),
        }
    }

    /// Look up a figure by its wire name
    pub fn get(&self, name: &str) -> Option<Interpretation> {
        match name {
            "cp" => self.cp,
            "cpk" => self.cpk,
            "cpl" => self.cpl,
            "cpu" => self.cpu,
            "cpm" => self.cpm,
            "k" => self.k,
            "cr" => self.cr,
            "dpmo" => self.dpmo,
            "sigma" => self.sigma,
            "ppm" => self.ppm,
            _ => None,
        }
    }

    /// `(name, interpretation)` pairs in a stable order
    pub fn entries(&self) -> [(&'static str, Option<Interpretation>); 10] {
        [
            ("cp", self.cp),
            ("cpk", self.cpk),
            ("cpl", self.cpl),
            ("cpu", self.cpu),
            ("cpm", self.cpm),
            ("k", self.k),
            ("cr", self.cr),
            ("dpmo", self.dpmo),
            ("sigma", self.sigma),
            ("ppm", self.ppm),
        ]
    }
}

//! The assembled result of a capability study

use crate::defect_rate::{DefectRateEstimate, OutOfSpecShare};
use crate::indices::CapabilityIndices;
use crate::interpretation::Interpretations;
use crate::wire::WireReport;
use serde::Serialize;
use spc_core::{DescriptiveSummary, Specification};
use spc_histogram::HistogramData;
use std::fmt;

/// Immutable result of [`analyze`](crate::analyze).
///
/// Holds every figure computed for the study; rendering layers read from it
/// and never recompute statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityReport {
    specification: Specification,
    summary: DescriptiveSummary,
    histogram: HistogramData,
    indices: CapabilityIndices,
    defect_rate: DefectRateEstimate,
    interpretations: Interpretations,
}

impl CapabilityReport {
    pub(crate) fn new(
        specification: Specification,
        summary: DescriptiveSummary,
        histogram: HistogramData,
        indices: CapabilityIndices,
        defect_rate: DefectRateEstimate,
    ) -> Self {
        let interpretations = Interpretations::classify(&indices, &defect_rate);
        Self {
            specification,
            summary,
            histogram,
            indices,
            defect_rate,
            interpretations,
        }
    }

    pub fn specification(&self) -> &Specification {
        &self.specification
    }

    pub fn summary(&self) -> &DescriptiveSummary {
        &self.summary
    }

    pub fn histogram(&self) -> &HistogramData {
        &self.histogram
    }

    pub fn indices(&self) -> &CapabilityIndices {
        &self.indices
    }

    pub fn defect_rate(&self) -> &DefectRateEstimate {
        &self.defect_rate
    }

    pub fn interpretations(&self) -> &Interpretations {
        &self.interpretations
    }

    /// Mean the study was evaluated against
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    /// Standard deviation the study was evaluated against
    pub fn std_dev(&self) -> f64 {
        self.summary.std_dev
    }

    /// Percent of output expected outside the limits
    pub fn out_of_spec(&self) -> Option<OutOfSpecShare> {
        self.defect_rate.out_of_spec()
    }

    /// True when σ was zero and σ-dependent figures are `None`
    pub fn is_degenerate(&self) -> bool {
        self.summary.is_degenerate()
    }

    /// Flatten into the serializable request/response shape
    pub fn to_wire(&self) -> WireReport {
        WireReport::from(self)
    }
}

impl fmt::Display for CapabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: Option<f64>| match value {
            Some(v) => format!("{v:.3}"),
            None => "N/A".to_string(),
        };
        write!(
            f,
            "CapabilityReport(n={}, mean={:.4}, sd={:.4}, cp={}, cpk={}, dpmo={})",
            self.summary.sample_size,
            self.summary.mean,
            self.summary.std_dev,
            show(self.indices.cp),
            show(self.indices.cpk),
            self.defect_rate
                .dpmo
                .map_or_else(|| "N/A".to_string(), |d| d.to_string()),
        )
    }
}

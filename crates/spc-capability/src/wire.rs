//! JSON shape exchanged with callers
//!
//! Undefined figures serialize as `null`; the engine never produces NaN or
//! infinity, so every number on the wire is finite.

use crate::report::CapabilityReport;
use serde::{Deserialize, Serialize};
use spc_core::{Error, Result};
use spc_histogram::HistogramData;
use std::collections::BTreeMap;

/// Location and spread the study was evaluated with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireInputData {
    pub mean: f64,
    pub std_dev: f64,
    pub sample_size: usize,
}

/// Indices, their interpretation labels and the histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireResults {
    pub cp: Option<f64>,
    pub cpk: Option<f64>,
    pub cpl: Option<f64>,
    pub cpu: Option<f64>,
    pub cpm: Option<f64>,
    pub k: Option<f64>,
    pub cr: Option<f64>,
    /// Band label per figure; `null` when the figure is undefined
    pub interpretation: BTreeMap<String, Option<String>>,
    pub histogram: HistogramData,
}

/// Flattened capability report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireReport {
    pub input_data: WireInputData,
    pub results: WireResults,
    pub dpmo: Option<u64>,
    pub sigma_level: Option<f64>,
    pub yield_value: Option<f64>,
    pub ppm_lower: Option<f64>,
    pub ppm_upper: Option<f64>,
    pub ppm_total: Option<f64>,
}

impl WireReport {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(json_error)
    }

    /// Serialize to an indented JSON string
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(json_error)
    }

    /// Parse a report previously produced by [`WireReport::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(json_error)
    }
}

fn json_error(e: serde_json::Error) -> Error {
    Error::Other(e.into())
}

impl From<&CapabilityReport> for WireReport {
    fn from(report: &CapabilityReport) -> Self {
        let summary = report.summary();
        let indices = report.indices();
        let defect_rate = report.defect_rate();

        let interpretation = report
            .interpretations()
            .entries()
            .into_iter()
            .map(|(name, band)| (name.to_string(), band.map(|b| b.label.to_string())))
            .collect();

        Self {
            input_data: WireInputData {
                mean: summary.mean,
                std_dev: summary.std_dev,
                sample_size: summary.sample_size,
            },
            results: WireResults {
                cp: indices.cp,
                cpk: indices.cpk,
                cpl: indices.cpl,
                cpu: indices.cpu,
                cpm: indices.cpm,
                k: indices.k,
                cr: indices.cr,
                interpretation,
                histogram: report.histogram().clone(),
            },
            dpmo: defect_rate.dpmo,
            sigma_level: defect_rate.sigma_level,
            yield_value: defect_rate.yield_value,
            ppm_lower: defect_rate.ppm_lower,
            ppm_upper: defect_rate.ppm_upper,
            ppm_total: defect_rate.ppm_total,
        }
    }
}

impl From<CapabilityReport> for WireReport {
    fn from(report: CapabilityReport) -> Self {
        Self::from(&report)
    }
}

//! Run chart of individual measurements against the specification

use serde::{Deserialize, Serialize};
use spc_core::{DescriptiveSummary, Specification};

/// One measurement in collection order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// 1-based sample number
    pub sample: usize,
    pub value: f64,
    /// Strictly above the USL or strictly below the LSL
    pub out_of_spec: bool,
}

/// Points plus the horizontal reference lines of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSeries {
    pub points: Vec<ControlPoint>,
    pub mean: f64,
    pub lsl: f64,
    pub usl: f64,
    pub nominal: f64,
    pub out_of_spec_count: usize,
}

impl ControlSeries {
    /// Vertical range that shows every point and every reference line
    pub fn value_domain(&self) -> (f64, f64) {
        self.points.iter().fold(
            (self.lsl.min(self.mean), self.usl.max(self.mean)),
            |(lo, hi), p| (lo.min(p.value), hi.max(p.value)),
        )
    }

    /// Points outside the specification
    pub fn out_of_spec_points(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
        self.points.iter().filter(|p| p.out_of_spec)
    }
}

/// Lay out `measurements` in order with mean, limit and nominal lines.
pub fn control_series(
    measurements: &[f64],
    specification: &Specification,
    summary: &DescriptiveSummary,
) -> ControlSeries {
    let points: Vec<ControlPoint> = measurements
        .iter()
        .enumerate()
        .map(|(i, &value)| ControlPoint {
            sample: i + 1,
            value,
            out_of_spec: !specification.contains(value),
        })
        .collect();
    let out_of_spec_count = points.iter().filter(|p| p.out_of_spec).count();

    ControlSeries {
        points,
        mean: summary.mean,
        lsl: specification.lsl(),
        usl: specification.usl(),
        nominal: specification.nominal(),
        out_of_spec_count,
    }
}

//! Sampled curves

use serde::{Deserialize, Serialize};
use spc_core::normal_pdf;

/// One sample of a plotted curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `points` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            let mut xs: Vec<f64> = (0..points - 1).map(|i| start + i as f64 * step).collect();
            xs.push(end);
            xs
        }
    }
}

/// Normal density sampled at each `x`
pub fn normal_curve(xs: &[f64], mean: f64, std_dev: f64) -> Vec<CurvePoint> {
    xs.iter()
        .map(|&x| CurvePoint::new(x, normal_pdf(x, mean, std_dev)))
        .collect()
}

/// Largest `y` of a curve, 0 when empty
pub fn peak(curve: &[CurvePoint]) -> f64 {
    curve.iter().map(|p| p.y).fold(0.0, f64::max)
}

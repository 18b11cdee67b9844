//! Various histogram building strategies
//!
//! Every rule resolves to an equal-width layout over `[min, max]` of the
//! sample; they only differ in how many bins they pick.

use crate::traits::HistogramBuilder;
use crate::types::HistogramData;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use spc_core::{Error, Result};

/// Upper bound on the number of bins any rule may produce
pub const MAX_BINS: usize = 1000;

/// Half-width of the range used when every value is identical
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Padding relative to the value when the absolute half-width would vanish
const DEGENERATE_RELATIVE_WIDTH: f64 = 1e-9;

fn check_sample(sample: &[f64]) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::insufficient(1, 0));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("histogram sample"));
    }
    Ok(())
}

fn min_max(sample: &[f64]) -> (f64, f64) {
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// Bins implied by a bin width over `range`, clamped to `[1, MAX_BINS]`
fn bins_for_width(range: f64, bin_width: f64) -> usize {
    if bin_width > 1e-10 {
        (range / bin_width)
            .ceil()
            .to_usize()
            .unwrap_or(MAX_BINS)
            .clamp(1, MAX_BINS)
    } else {
        1
    }
}

/// Sturges' bin count, `ceil(log2 n) + 1`
fn sturges_bins(n: usize) -> usize {
    ((n as f64).log2().ceil() + 1.0)
        .to_usize()
        .unwrap_or(1)
        .clamp(1, MAX_BINS)
}

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins.
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.clamp(1, MAX_BINS),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<HistogramData> {
        check_sample(sample)?;

        let (mut min, mut max) = min_max(sample);
        if !(max - min).is_finite() {
            return Err(Error::InvalidInput(
                "histogram sample range overflows".to_string(),
            ));
        }
        if max - min < 1e-10 {
            // All values are the same: pad so the single bin has width
            let centre = min + (max - min) / 2.0;
            let half_width = DEGENERATE_HALF_WIDTH.max(centre.abs() * DEGENERATE_RELATIVE_WIDTH);
            min = centre - half_width;
            max = centre + half_width;
        }

        let width = (max - min) / self.num_bins as f64;
        let mut edges: Vec<f64> = (0..self.num_bins).map(|i| min + i as f64 * width).collect();
        // Ensure last bin includes max
        edges.push(max);
        // Tiny widths can collapse neighbouring edges at large magnitudes
        edges.dedup_by(|a, b| *a <= *b);
        if edges.len() < 2 || edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "cannot lay out bins over [{min}, {max}]"
            )));
        }

        let num_bins = edges.len() - 1;
        let mut counts = vec![0usize; num_bins];
        for &value in sample {
            let idx = edges.partition_point(|&edge| edge <= value);
            counts[idx.saturating_sub(1).min(num_bins - 1)] += 1;
        }

        HistogramData::from_parts(edges, counts).ok_or_else(|| {
            Error::InvalidInput("histogram edges are not strictly increasing".to_string())
        })
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Sturges' rule for the number of bins
///
/// Uses `k = ceil(log2 n) + 1`, appropriate for roughly normal data.
pub struct SturgesRule;

impl HistogramBuilder for SturgesRule {
    fn build(&self, sample: &[f64]) -> Result<HistogramData> {
        check_sample(sample)?;
        FixedWidthBuilder::new(sturges_bins(sample.len())).build(sample)
    }
}

/// Scott's rule for optimal bin width
///
/// Uses the formula: h = 3.5 * σ * n^(-1/3)
/// where σ is the standard deviation and n is the sample size.
pub struct ScottsRule;

impl HistogramBuilder for ScottsRule {
    fn build(&self, sample: &[f64]) -> Result<HistogramData> {
        check_sample(sample)?;

        let n_f = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n_f;
        let variance = sample
            .iter()
            .fold(0.0, |acc, &x| acc + (x - mean) * (x - mean))
            / n_f;
        let bin_width = 3.5 * variance.sqrt() * n_f.powf(-1.0 / 3.0);

        let (min, max) = min_max(sample);
        FixedWidthBuilder::new(bins_for_width(max - min, bin_width)).build(sample)
    }
}

/// Freedman-Diaconis rule for optimal bin width
///
/// Uses the formula: h = 2 * IQR * n^(-1/3)
/// where IQR is the interquartile range. Falls back to Sturges' rule when
/// the IQR is zero.
pub struct FreedmanDiaconisRule;

impl HistogramBuilder for FreedmanDiaconisRule {
    fn build(&self, sample: &[f64]) -> Result<HistogramData> {
        check_sample(sample)?;

        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let iqr = sorted[(3 * n) / 4] - sorted[n / 4];
        let num_bins = if iqr > 1e-10 {
            let bin_width = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
            bins_for_width(sorted[n - 1] - sorted[0], bin_width)
        } else {
            sturges_bins(n)
        };

        FixedWidthBuilder::new(num_bins).build(&sorted)
    }
}

/// Serializable choice of binning strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinningRule {
    /// `ceil(log2 n) + 1` bins
    #[default]
    Sturges,
    /// Width `3.5 σ n^(-1/3)`
    Scott,
    /// Width `2 IQR n^(-1/3)`
    FreedmanDiaconis,
    /// Exactly this many bins
    Fixed(usize),
}

impl BinningRule {
    /// Reject rules that cannot produce a histogram
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Fixed(0) => Err(Error::InvalidParameter(
                "fixed bin count must be positive".to_string(),
            )),
            Self::Fixed(k) if k > MAX_BINS => Err(Error::InvalidParameter(format!(
                "fixed bin count {k} exceeds the maximum of {MAX_BINS}"
            ))),
            _ => Ok(()),
        }
    }
}

impl HistogramBuilder for BinningRule {
    fn build(&self, sample: &[f64]) -> Result<HistogramData> {
        self.validate()?;
        match *self {
            Self::Sturges => SturgesRule.build(sample),
            Self::Scott => ScottsRule.build(sample),
            Self::FreedmanDiaconis => FreedmanDiaconisRule.build(sample),
            Self::Fixed(k) => FixedWidthBuilder::new(k).build(sample),
        }
    }

    fn target_bins(&self) -> Option<usize> {
        match *self {
            Self::Fixed(k) => Some(k),
            _ => None,
        }
    }
}

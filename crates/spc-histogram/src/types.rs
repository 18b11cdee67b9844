//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use spc_core::Error;
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };

        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin (right edge exclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Frequency histogram of a measurement set.
///
/// `bins` holds the edges (one more than `counts`), strictly increasing.
/// `counts[i]` is the number of measurements in `[bins[i], bins[i + 1])`;
/// the last bin also includes its right edge so the maximum is counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistogram", into = "RawHistogram")]
pub struct HistogramData {
    bins: Vec<f64>,
    counts: Vec<usize>,
}

impl HistogramData {
    /// Assemble a histogram from edges and counts.
    ///
    /// Returns `None` when the lengths disagree, an edge is not finite or
    /// the edges are not strictly increasing.
    pub fn from_parts(bins: Vec<f64>, counts: Vec<usize>) -> Option<Self> {
        if bins.len() != counts.len() + 1 || counts.is_empty() {
            return None;
        }
        if bins.iter().any(|e| !e.is_finite()) || bins.windows(2).any(|w| w[0] >= w[1]) {
            return None;
        }
        Some(Self { bins, counts })
    }

    /// Bin edges, including the rightmost edge
    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Count per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of measurements counted
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Left edge of the first bin
    pub fn min(&self) -> f64 {
        self.bins[0]
    }

    /// Right edge of the last bin
    pub fn max(&self) -> f64 {
        self.bins[self.bins.len() - 1]
    }

    /// The `i`-th bin with its density
    pub fn bin(&self, i: usize) -> Option<HistogramBin> {
        let count = *self.counts.get(i)?;
        Some(HistogramBin::new(
            self.bins[i],
            self.bins[i + 1],
            count,
            self.total_count(),
        ))
    }

    /// Iterate over all bins in order
    pub fn iter_bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        let total = self.total_count();
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &count)| HistogramBin::new(self.bins[i], self.bins[i + 1], count, total))
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if value < self.min() || value > self.max() {
            return None;
        }
        let idx = self.bins.partition_point(|&edge| edge <= value);
        Some(idx.saturating_sub(1).min(self.len() - 1))
    }
}

impl fmt::Display for HistogramData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count(),
            self.min(),
            self.max()
        )
    }
}

/// Serialized form, validated on the way in
#[derive(Serialize, Deserialize)]
struct RawHistogram {
    bins: Vec<f64>,
    counts: Vec<usize>,
}

impl TryFrom<RawHistogram> for HistogramData {
    type Error = Error;

    fn try_from(raw: RawHistogram) -> Result<Self, Self::Error> {
        let (edges, bins) = (raw.bins.len(), raw.counts.len());
        Self::from_parts(raw.bins, raw.counts).ok_or_else(|| {
            Error::InvalidInput(format!(
                "histogram with {edges} edges and {bins} counts is malformed"
            ))
        })
    }
}

impl From<HistogramData> for RawHistogram {
    fn from(hist: HistogramData) -> Self {
        Self {
            bins: hist.bins,
            counts: hist.counts,
        }
    }
}

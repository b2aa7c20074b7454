//! Equal-width histogram binning and text rendering
//!
//! Two renderings share the same binning:
//! - a wide, multi-line bar chart with a range label per bin
//! - an inline sparkline with one block character per bin

use serde::Serialize;

use super::error::AnalysisResult;
use super::schema::Dataset;

/// Minimum number of values needed to draw a histogram
pub const MIN_HISTOGRAM_VALUES: usize = 2;

/// Shown instead of a histogram when fewer than two values exist
pub const INSUFFICIENT_DATA: &str = "[Insufficient data]";

/// Shown by the wide render when every bin is empty
pub const NO_DATA_IN_BINS: &str = "[No data in bins]";

/// Shown by the inline render when every bin is empty
pub const NO_DATA: &str = "[No data]";

/// Sparkline ramp, from empty (level 0) to a full block (level 8)
const SPARK_LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Solid bar character for the wide render
const BAR_CHAR: char = '█';

/// Marker for a bin whose scaled bar rounds to zero but is not empty
const SMALL_BAR_CHAR: char = '▁';

/// Width the range label is padded to in the wide render
const LABEL_WIDTH: usize = 15;

/// Half-width of the domain used when every value is identical
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Minimum degenerate half-width relative to the value's magnitude
const DEGENERATE_RELATIVE_WIDTH: f64 = 1e-9;

/// Equal-width bins over `[min, max]` with a count per bin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBins {
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Number of values in each bin
    pub counts: Vec<usize>,
}

impl HistogramBins {
    /// Bin `values` into `bin_count` equal-width bins.
    ///
    /// Bins are half-open `[lo, hi)` except the last, which also includes its
    /// upper edge. When all values are equal, the domain is widened to
    /// `value ± 0.5` (or a small fraction of `value` when that is larger) so
    /// the bin width never collapses to zero.
    ///
    /// Returns `None` for fewer than two values or zero bins.
    pub fn from_values(values: &[f64], bin_count: usize) -> Option<Self> {
        if values.len() < MIN_HISTOGRAM_VALUES || bin_count == 0 {
            return None;
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            let half = DEGENERATE_HALF_WIDTH.max(lo.abs() * DEGENERATE_RELATIVE_WIDTH);
            lo -= half;
            hi += half;
        }

        // Work with half the range: `hi - lo` overflows for extreme finite values
        let half_span = hi / 2.0 - lo / 2.0;
        let mut edges: Vec<f64> = (0..=bin_count)
            .map(|i| {
                let step = half_span * (i as f64 / bin_count as f64);
                lo + step + step
            })
            .collect();
        // Pin the last edge so rounding never leaves the maximum outside
        edges[bin_count] = hi;

        let mut counts = vec![0usize; bin_count];
        for &v in values {
            counts[bin_index(&edges, v)] += 1;
        }

        Some(Self { edges, counts })
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Multi-line bar chart, one line per bin, bars scaled to `width`.
    pub fn render_wide(&self, width: usize) -> String {
        let max_count = self.max_count();
        if max_count == 0 {
            return NO_DATA_IN_BINS.to_string();
        }

        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let scaled = (count as f64 / max_count as f64 * width as f64).round() as usize;
                let bar = if scaled > 0 {
                    BAR_CHAR.to_string().repeat(scaled)
                } else if count > 0 {
                    SMALL_BAR_CHAR.to_string()
                } else {
                    " ".to_string()
                };
                let label = format!("{:.2}-{:.2}", self.edges[i], self.edges[i + 1]);
                format!("{:<width$} |{}", label, bar, width = LABEL_WIDTH)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Single-line sparkline with exactly one character per bin.
    pub fn render_inline(&self) -> String {
        let max_count = self.max_count();
        if max_count == 0 {
            return NO_DATA.to_string();
        }

        self.counts
            .iter()
            .map(|&count| {
                let level = (count as f64 / max_count as f64 * 8.0).floor() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            })
            .collect()
    }
}

/// Index of the bin containing `v`, correcting for floating-point drift
/// against the precomputed edges.
fn bin_index(edges: &[f64], v: f64) -> usize {
    let bins = edges.len() - 1;
    let lo = edges[0];
    let hi = edges[bins];
    let fraction = (v / 2.0 - lo / 2.0) / (hi / 2.0 - lo / 2.0);
    let mut idx = (fraction * bins as f64).floor() as isize;
    idx = idx.clamp(0, bins as isize - 1);
    let mut idx = idx as usize;

    if idx > 0 && v < edges[idx] {
        idx -= 1;
    } else if idx + 1 < bins && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

/// Wide histogram for raw values, or a sentinel when it cannot be drawn.
pub fn histogram_wide(values: &[f64], bin_count: usize, width: usize) -> String {
    match HistogramBins::from_values(values, bin_count) {
        Some(bins) => bins.render_wide(width),
        None => INSUFFICIENT_DATA.to_string(),
    }
}

/// Inline sparkline for raw values, or a sentinel when it cannot be drawn.
pub fn histogram_inline(values: &[f64], bin_count: usize) -> String {
    match HistogramBins::from_values(values, bin_count) {
        Some(bins) => bins.render_inline(),
        None => INSUFFICIENT_DATA.to_string(),
    }
}

impl Dataset {
    pub fn histogram_wide(
        &self,
        column: &str,
        bins: usize,
        width: usize,
    ) -> AnalysisResult<String> {
        let values = self.non_missing_values(column)?;
        Ok(histogram_wide(&values, bins, width))
    }

    pub fn histogram_inline(&self, column: &str, bins: usize) -> AnalysisResult<String> {
        let values = self.non_missing_values(column)?;
        Ok(histogram_inline(&values, bins))
    }
}

//! Per-column analysis driver
//!
//! Columns are independent of each other, so statistics and histograms are
//! computed in parallel with rayon. Output order matches the selection order.

use rayon::prelude::*;
use serde::Serialize;

use super::error::AnalysisResult;
use super::histogram::{HistogramBins, INSUFFICIENT_DATA};
use super::schema::Dataset;
use super::statistics::{compute_statistics, ColumnStatistics};

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 10;

/// Default width of the wide histogram, in characters
pub const DEFAULT_HISTOGRAM_WIDTH: usize = 20;

/// Settings for the statistics and histogram stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub bins: usize,
    pub histogram_width: usize,
    /// Also compute skewness and kurtosis
    pub show_all_stats: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            histogram_width: DEFAULT_HISTOGRAM_WIDTH,
            show_all_stats: false,
        }
    }
}

/// Statistics and both histogram renderings for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub statistics: ColumnStatistics,
    pub inline_histogram: String,
    pub wide_histogram: String,
}

/// Analyze every selected column.
///
/// Columns without any non-missing value are skipped silently. Unknown
/// column names are an error.
pub fn analyze_columns(
    dataset: &Dataset,
    selection: &[String],
    config: &AnalysisConfig,
) -> AnalysisResult<Vec<ColumnReport>> {
    let reports = selection
        .par_iter()
        .map(|name| analyze_column(dataset, name, config))
        .collect::<AnalysisResult<Vec<_>>>()?;

    Ok(reports.into_iter().flatten().collect())
}

fn analyze_column(
    dataset: &Dataset,
    name: &str,
    config: &AnalysisConfig,
) -> AnalysisResult<Option<ColumnReport>> {
    let column = dataset.column(name)?;
    let Some(cells) = column.numeric_values() else {
        return Ok(None);
    };
    let Some(statistics) = compute_statistics(name, cells, config.show_all_stats) else {
        return Ok(None);
    };

    // Bin once and feed both renderings
    let values: Vec<f64> = cells.iter().flatten().copied().collect();
    let bins = HistogramBins::from_values(&values, config.bins);
    let (inline_histogram, wide_histogram) = match bins {
        Some(bins) => (bins.render_inline(), bins.render_wide(config.histogram_width)),
        None => (INSUFFICIENT_DATA.to_string(), INSUFFICIENT_DATA.to_string()),
    };

    Ok(Some(ColumnReport {
        statistics,
        inline_histogram,
        wide_histogram,
    }))
}

/// Just the statistics, in selection order, for structured export.
pub fn collect_statistics(reports: &[ColumnReport]) -> Vec<ColumnStatistics> {
    reports.iter().map(|r| r.statistics.clone()).collect()
}

//! Descriptive statistics for a single numeric column
//!
//! All statistics are computed over the non-missing values only. A column with
//! no values at all has no statistics; callers skip it.

use serde::Serialize;

use super::error::AnalysisResult;
use super::schema::Dataset;

/// Summary statistics for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStatistics {
    /// Column name
    pub column: String,
    /// Number of non-missing values
    pub count: usize,
    /// Number of missing values (`count + missing` is the row count)
    pub missing: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub q25: f64,
    pub q75: f64,
    /// Sample standard deviation (N - 1 denominator); 0 for a single value
    pub std: f64,
    /// `max - min`
    pub range: f64,
    /// `q75 - q25`
    pub iqr: f64,
    /// `std / mean`, reported as 0 when the mean is exactly 0
    pub cv: f64,
    /// Population skewness, only when all statistics are requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew: Option<f64>,
    /// Population excess kurtosis, only when all statistics are requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kurtosis: Option<f64>,
}

/// Compute statistics for a column's cells.
///
/// Returns `None` when the column has no non-missing values.
pub fn compute_statistics(
    name: &str,
    cells: &[Option<f64>],
    include_shape: bool,
) -> Option<ColumnStatistics> {
    let mut sorted: Vec<f64> = cells.iter().flatten().copied().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let n = count as f64;
    let min = sorted[0];
    let max = sorted[count - 1];
    let mean = sorted.iter().sum::<f64>() / n;
    let q25 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q75 = quantile_sorted(&sorted, 0.75);

    let sum_sq: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
    let std = if count > 1 {
        (sum_sq / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    let cv = if mean != 0.0 { std / mean } else { 0.0 };

    let (skew, kurtosis) = if include_shape {
        let (s, k) = shape_moments(&sorted, mean);
        (Some(s), Some(k))
    } else {
        (None, None)
    };

    Some(ColumnStatistics {
        column: name.to_string(),
        count,
        missing: cells.len() - count,
        min,
        max,
        mean,
        median,
        q25,
        q75,
        std,
        range: max - min,
        iqr: q75 - q25,
        cv,
        skew,
        kurtosis,
    })
}

/// Quantile with linear interpolation between closest ranks.
///
/// `sorted` must be non-empty and ascending; `q` is in `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Skewness (m3 / m2^1.5) and excess kurtosis (m4 / m2^2 - 3) from
/// population central moments. Both are 0 for zero-variance data.
fn shape_moments(values: &[f64], mean: f64) -> (f64, f64) {
    let n = values.len() as f64;
    let (m2, m3, m4) = values.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &x| {
        let d = x - mean;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
    });
    let (m2, m3, m4) = (m2 / n, m3 / n, m4 / n);

    if m2 == 0.0 {
        return (0.0, 0.0);
    }
    (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
}

impl Dataset {
    /// Statistics for a named column. Text and empty columns yield `Ok(None)`.
    pub fn compute_statistics(
        &self,
        column: &str,
        include_shape: bool,
    ) -> AnalysisResult<Option<ColumnStatistics>> {
        let col = self.column(column)?;
        Ok(col
            .numeric_values()
            .and_then(|cells| compute_statistics(&col.name, cells, include_shape)))
    }
}

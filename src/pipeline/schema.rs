//! Typed schema inference over raw CSV cells
//!
//! The loader reads every column as text. This module decides, per column,
//! whether the cells form a numeric column, a text column, or a column with
//! nothing in it at all, and holds the resulting in-memory [`Dataset`].

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use super::error::{AnalysisError, AnalysisResult};

/// Cell contents treated as "no value" in addition to empty cells
const MISSING_MARKERS: &[&str] = &[
    "NA", "N/A", "na", "n/a", "NaN", "nan", "NAN", "-NaN", "-nan", "null", "NULL", "None", "none",
    "#N/A", "#NA", "<NA>",
];

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
    AllMissing,
}

/// Typed storage for one column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Every present cell parsed as a finite number
    Numeric(Vec<Option<f64>>),
    /// At least one present cell is not a number
    Text(Vec<Option<String>>),
    /// No cell carries a value; holds the row count
    AllMissing(usize),
}

impl ColumnData {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Text(_) => ColumnKind::Text,
            ColumnData::AllMissing(_) => ColumnKind::AllMissing,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::AllMissing(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cells carrying a value
    pub fn non_missing_count(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.iter().filter(|x| x.is_some()).count(),
            ColumnData::Text(v) => v.iter().filter(|x| x.is_some()).count(),
            ColumnData::AllMissing(_) => 0,
        }
    }

    fn take_rows(&self, rows: &[usize]) -> ColumnData {
        match self {
            ColumnData::Numeric(v) => ColumnData::Numeric(rows.iter().map(|&i| v[i]).collect()),
            ColumnData::Text(v) => ColumnData::Text(rows.iter().map(|&i| v[i].clone()).collect()),
            ColumnData::AllMissing(_) => ColumnData::AllMissing(rows.len()),
        }
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Numeric cells of the column, or `None` for text and empty columns
    pub fn numeric_values(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            _ => None,
        }
    }
}

/// Returns true when a raw cell should be read as missing
pub fn is_missing_marker(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed)
}

/// Infer the column type from raw cells.
///
/// A column is numeric when every present cell parses as `f64`. Parsed values
/// that are not finite (`inf`, `-inf`) are stored as missing.
pub fn infer_column(name: &str, cells: Vec<Option<String>>) -> Column {
    let cells: Vec<Option<String>> = cells
        .into_iter()
        .map(|c| c.filter(|s| !is_missing_marker(s)))
        .collect();

    if cells.iter().all(|c| c.is_none()) {
        return Column::new(name, ColumnData::AllMissing(cells.len()));
    }

    let parsed: Option<Vec<Option<f64>>> = cells
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .map(|v| if v.is_finite() { Some(v) } else { None }),
        })
        .collect();

    match parsed {
        Some(values) => Column::new(name, ColumnData::Numeric(values)),
        None => Column::new(name, ColumnData::Text(cells)),
    }
}

/// In-memory dataset: ordered columns sharing one row count
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
    sampled_from: Option<usize>,
}

impl Dataset {
    /// Build a dataset from columns. All columns must share the same length;
    /// a mismatch is reported as a malformed source.
    pub fn new(columns: Vec<Column>) -> AnalysisResult<Self> {
        let row_count = columns.first().map(|c| c.data.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.data.len() != row_count) {
            return Err(AnalysisError::MalformedSource(format!(
                "column '{}' has {} rows, expected {}",
                bad.name,
                bad.data.len(),
                row_count
            )));
        }
        Ok(Self {
            columns,
            row_count,
            sampled_from: None,
        })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Row count before sampling, if sampling was applied
    pub fn sampled_from(&self) -> Option<usize> {
        self.sampled_from
    }

    pub fn column(&self, name: &str) -> AnalysisResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AnalysisError::ColumnNotFound(name.to_string()))
    }

    /// Non-missing values of a numeric column, in row order.
    /// Text and empty columns yield no values.
    pub fn non_missing_values(&self, name: &str) -> AnalysisResult<Vec<f64>> {
        let column = self.column(name)?;
        Ok(column
            .numeric_values()
            .map(|v| v.iter().flatten().copied().collect())
            .unwrap_or_default())
    }

    /// Keep `sample_size` rows chosen without replacement with a seeded RNG.
    ///
    /// Returns `None` when `sample_size >= row_count` (nothing to do).
    /// Selected rows keep their original relative order.
    pub fn sample(&self, sample_size: usize, seed: u64) -> Option<Dataset> {
        if sample_size >= self.row_count {
            return None;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut rows = index::sample(&mut rng, self.row_count, sample_size).into_vec();
        rows.sort_unstable();

        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.data.take_rows(&rows)))
            .collect();

        Some(Dataset {
            columns,
            row_count: sample_size,
            sampled_from: Some(self.row_count),
        })
    }
}

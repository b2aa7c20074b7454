//! Dataset loader for CSV files
//!
//! Reads every column as text with polars, types the columns with
//! [`infer_column`], optionally subsamples rows and picks the numeric columns
//! to analyze.

use std::path::Path;

use polars::prelude::*;

use super::error::{AnalysisError, AnalysisResult};
use super::schema::{infer_column, ColumnKind, Dataset};

/// Seed used for row sampling unless overridden
pub const DEFAULT_SEED: u64 = 42;

/// Options controlling how a dataset is loaded
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Keep only this many rows, chosen at random without replacement
    pub sample_size: Option<usize>,
    /// Restrict the analysis to these column names
    pub columns: Option<Vec<String>>,
    /// Seed for row sampling
    pub seed: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sample_size: None,
            columns: None,
            seed: DEFAULT_SEED,
        }
    }
}

/// Severity of a loader notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Non-fatal message produced while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// A loaded dataset together with the columns selected for analysis
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    /// Numeric, non-empty columns to analyze, in file order
    pub selection: Vec<String>,
    /// Informational messages and warnings, in the order they arose
    pub notices: Vec<Notice>,
}

/// Load a CSV file and select the numeric columns to analyze.
///
/// # Errors
/// - [`AnalysisError::NotFound`] if `path` does not exist
/// - [`AnalysisError::EmptyData`] if the file has no data rows
/// - [`AnalysisError::MalformedSource`] if the file cannot be parsed
/// - [`AnalysisError::NoNumericColumns`] if nothing is left to analyze
pub fn load_dataset(path: &Path, options: &LoadOptions) -> AnalysisResult<LoadedDataset> {
    let dataset = read_csv(path)?;
    prepare_dataset(dataset, options)
}

/// Read a CSV file into a typed [`Dataset`] without sampling or selection.
pub fn read_csv(path: &Path) -> AnalysisResult<Dataset> {
    if !path.exists() {
        return Err(AnalysisError::NotFound(path.to_path_buf()));
    }
    let size = std::fs::metadata(path)
        .map_err(|e| AnalysisError::MalformedSource(e.to_string()))?
        .len();
    if size == 0 {
        return Err(AnalysisError::EmptyData);
    }

    // Schema length 0 reads every column as String; typing happens below
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_truncate_ragged_lines(true)
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| match e {
            PolarsError::NoData(_) => AnalysisError::EmptyData,
            e => AnalysisError::MalformedSource(e.to_string()),
        })?;

    let raw = df
        .get_columns()
        .iter()
        .map(|column| {
            let cells: Vec<Option<String>> = column
                .as_materialized_series()
                .str()
                .map_err(|e| AnalysisError::MalformedSource(e.to_string()))?
                .into_iter()
                .map(|cell| cell.map(str::to_string))
                .collect();
            Ok((column.name().to_string(), cells))
        })
        .collect::<AnalysisResult<Vec<_>>>()?;

    let keep = non_blank_rows(&raw, df.height());
    if !keep.iter().any(|&k| k) {
        return Err(AnalysisError::EmptyData);
    }

    let columns = raw
        .into_iter()
        .map(|(name, cells)| {
            let cells = cells
                .into_iter()
                .zip(&keep)
                .filter_map(|(cell, &k)| k.then_some(cell))
                .collect();
            infer_column(&name, cells)
        })
        .collect();

    Dataset::new(columns)
}

/// Rows with at least one non-blank cell.
///
/// Blank lines come back from the reader as rows of nulls; they are not data.
fn non_blank_rows(columns: &[(String, Vec<Option<String>>)], height: usize) -> Vec<bool> {
    (0..height)
        .map(|row| {
            columns.iter().any(|(_, cells)| {
                cells
                    .get(row)
                    .and_then(|cell| cell.as_deref())
                    .is_some_and(|cell| !cell.trim().is_empty())
            })
        })
        .collect()
}

/// Apply sampling and column selection to an already-typed dataset.
pub fn prepare_dataset(dataset: Dataset, options: &LoadOptions) -> AnalysisResult<LoadedDataset> {
    if dataset.row_count() == 0 {
        return Err(AnalysisError::EmptyData);
    }

    let mut notices = Vec::new();

    let dataset = match options.sample_size {
        Some(size) => match dataset.sample(size, options.seed) {
            Some(sampled) => {
                notices.push(Notice::info(format!("Sampled {} rows from dataset", size)));
                sampled
            }
            None => dataset,
        },
        None => dataset,
    };

    let (selection, filter_notices) = select_columns(&dataset, options.columns.as_deref());
    notices.extend(filter_notices);

    if selection.is_empty() {
        return Err(AnalysisError::NoNumericColumns);
    }

    Ok(LoadedDataset {
        dataset,
        selection,
        notices,
    })
}

/// Numeric columns with at least one value, intersected with `filter`.
///
/// Filter names absent from the dataset, or present but not numeric, produce
/// warnings rather than errors.
pub fn select_columns(dataset: &Dataset, filter: Option<&[String]>) -> (Vec<String>, Vec<Notice>) {
    let mut notices = Vec::new();

    if let Some(filter) = filter {
        for name in filter {
            match dataset.column(name) {
                Err(_) => notices.push(Notice::warning(format!(
                    "Column '{}' not found in CSV file",
                    name
                ))),
                Ok(column) if column.data.kind() != ColumnKind::Numeric => notices.push(
                    Notice::warning(format!("Column '{}' is not numeric; skipping", name)),
                ),
                Ok(_) => {}
            }
        }
    }

    let selection = dataset
        .columns()
        .iter()
        .filter(|c| c.data.kind() == ColumnKind::Numeric && c.data.non_missing_count() > 0)
        .filter(|c| filter.map_or(true, |f| f.iter().any(|name| name == &c.name)))
        .map(|c| c.name.clone())
        .collect();

    (selection, notices)
}

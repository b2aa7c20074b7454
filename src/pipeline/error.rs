//! Error types for loading and analyzing datasets.
//!
//! Every variant is terminal for the current run. Per-column problems such as
//! a column without any values are not errors: those columns are skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a CSV file or querying the dataset.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The source file does not exist.
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source contains zero data rows.
    ///
    /// Raised both for a zero-byte file and for a file that has a header row
    /// but nothing below it.
    #[error("CSV file contains no data")]
    EmptyData,

    /// No numeric column survived type inference, missing-value filtering and
    /// the optional column filter.
    #[error("No numeric columns found")]
    NoNumericColumns,

    /// The source could not be parsed as delimited text.
    #[error("Error loading CSV file: {0}")]
    MalformedSource(String),

    /// A column was requested by name but is not present in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),
}

/// Convenience alias used throughout the pipeline.
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

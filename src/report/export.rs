//! Export of analysis results to text, JSON or CSV files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use polars::prelude::*;

use crate::pipeline::ColumnStatistics;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Detailed text report (printed to the console unless --output is set)
    #[default]
    Txt,
    /// One CSV row per analyzed column
    Csv,
    /// JSON array with one record per analyzed column
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Default export path: next to the input, with a `_statistics` suffix
/// (e.g., `data/sales.csv` -> `data/sales_statistics.json`).
pub fn default_export_path(input: &Path, format: ExportFormat) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    parent.join(format!("{}_statistics.{}", stem, format.extension()))
}

/// Write the rendered text report to `path`.
pub fn export_text_report(report: &str, path: &Path) -> Result<()> {
    std::fs::write(path, format!("{}\n", report))
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

/// Write statistics as a pretty-printed JSON array.
pub fn export_json(stats: &[ColumnStatistics], path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(stats).context("Failed to serialize statistics to JSON")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write statistics to {}", path.display()))?;

    Ok(())
}

/// Write statistics as CSV, one row per column.
///
/// The `skew` and `kurtosis` columns are written only when at least one
/// record carries them.
pub fn export_csv(stats: &[ColumnStatistics], path: &Path) -> Result<()> {
    let mut df = statistics_frame(stats).context("Failed to build statistics table")?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}

/// Dispatch to the structured exporter for `format`.
/// Text reports go through [`export_text_report`] since they need the rendered report.
pub fn export_statistics(
    stats: &[ColumnStatistics],
    format: ExportFormat,
    path: &Path,
) -> Result<()> {
    match format {
        ExportFormat::Csv => export_csv(stats, path),
        ExportFormat::Json => export_json(stats, path),
        ExportFormat::Txt => anyhow::bail!("Text export requires a rendered report"),
    }
}

fn float_column(
    name: &str,
    stats: &[ColumnStatistics],
    value: impl Fn(&ColumnStatistics) -> f64,
) -> Column {
    Column::new(name.into(), stats.iter().map(value).collect::<Vec<f64>>())
}

fn statistics_frame(stats: &[ColumnStatistics]) -> PolarsResult<DataFrame> {
    let names: Vec<&str> = stats.iter().map(|s| s.column.as_str()).collect();
    let counts: Vec<u64> = stats.iter().map(|s| s.count as u64).collect();
    let missing: Vec<u64> = stats.iter().map(|s| s.missing as u64).collect();

    let mut columns = vec![
        Column::new("column".into(), names),
        Column::new("count".into(), counts),
        Column::new("missing".into(), missing),
        float_column("min", stats, |s| s.min),
        float_column("max", stats, |s| s.max),
        float_column("mean", stats, |s| s.mean),
        float_column("median", stats, |s| s.median),
        float_column("q25", stats, |s| s.q25),
        float_column("q75", stats, |s| s.q75),
        float_column("std", stats, |s| s.std),
        float_column("range", stats, |s| s.range),
        float_column("iqr", stats, |s| s.iqr),
        float_column("cv", stats, |s| s.cv),
    ];

    if stats.iter().any(|s| s.skew.is_some() || s.kurtosis.is_some()) {
        let skew: Vec<Option<f64>> = stats.iter().map(|s| s.skew).collect();
        let kurtosis: Vec<Option<f64>> = stats.iter().map(|s| s.kurtosis).collect();
        columns.push(Column::new("skew".into(), skew));
        columns.push(Column::new("kurtosis".into(), kurtosis));
    }

    DataFrame::new(columns)
}

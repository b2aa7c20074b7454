//! Statistics table with inline histograms

use console::{measure_text_width, pad_str, Alignment};

use crate::pipeline::{ColumnReport, ColumnStatistics};

/// Column names longer than this are cut in table cells
pub const MAX_NAME_WIDTH: usize = 20;

/// A statistic shown as a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Min,
    Q25,
    Mean,
    Median,
    Q75,
    Max,
    Std,
    Skew,
    Kurtosis,
    Range,
    Iqr,
    Cv,
}

/// Columns shown by default
pub const BASIC_FIELDS: &[StatField] = &[
    StatField::Min,
    StatField::Q25,
    StatField::Mean,
    StatField::Median,
    StatField::Q75,
    StatField::Max,
    StatField::Std,
];

/// Columns shown with `--all-stats`
pub const ALL_FIELDS: &[StatField] = &[
    StatField::Min,
    StatField::Q25,
    StatField::Mean,
    StatField::Median,
    StatField::Q75,
    StatField::Max,
    StatField::Std,
    StatField::Skew,
    StatField::Kurtosis,
    StatField::Range,
    StatField::Iqr,
    StatField::Cv,
];

impl StatField {
    pub fn header(self) -> &'static str {
        match self {
            StatField::Min => "Min",
            StatField::Q25 => "25%",
            StatField::Mean => "Mean",
            StatField::Median => "Median",
            StatField::Q75 => "75%",
            StatField::Max => "Max",
            StatField::Std => "Std",
            StatField::Skew => "Skew",
            StatField::Kurtosis => "Kurt",
            StatField::Range => "Range",
            StatField::Iqr => "IQR",
            StatField::Cv => "CV%",
        }
    }

    /// Value of this field; absent shape statistics read as 0.
    pub fn value(self, stats: &ColumnStatistics) -> f64 {
        match self {
            StatField::Min => stats.min,
            StatField::Q25 => stats.q25,
            StatField::Mean => stats.mean,
            StatField::Median => stats.median,
            StatField::Q75 => stats.q75,
            StatField::Max => stats.max,
            StatField::Std => stats.std,
            StatField::Skew => stats.skew.unwrap_or(0.0),
            StatField::Kurtosis => stats.kurtosis.unwrap_or(0.0),
            StatField::Range => stats.range,
            StatField::Iqr => stats.iqr,
            StatField::Cv => stats.cv,
        }
    }

    pub fn format(self, stats: &ColumnStatistics) -> String {
        let value = self.value(stats);
        match self {
            StatField::Skew | StatField::Kurtosis => format!("{:.3}", value),
            StatField::Cv => format!("{:.2}%", value * 100.0),
            _ => format!("{:.4}", value),
        }
    }
}

/// Format an integer with comma thousands separators
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_WIDTH).collect()
}

/// Render the statistics table.
///
/// One row per column; every column is as wide as its widest cell, measured
/// in terminal cells so block characters line up.
pub fn format_table(reports: &[ColumnReport], show_all_stats: bool) -> String {
    let fields = if show_all_stats {
        ALL_FIELDS
    } else {
        BASIC_FIELDS
    };

    let mut headers: Vec<String> = Vec::with_capacity(fields.len() + 2);
    headers.push("Column".to_string());
    headers.extend(fields.iter().map(|f| f.header().to_string()));
    headers.push("Histogram".to_string());

    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|report| {
            let mut row = Vec::with_capacity(headers.len());
            row.push(truncate_name(&report.statistics.column));
            row.extend(fields.iter().map(|f| f.format(&report.statistics)));
            row.push(report.inline_histogram.clone());
            row
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let join_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad_str(cell, w, Alignment::Left, None).into_owned())
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_row(headers.as_slice()));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|row| join_row(row.as_slice())));
    lines.join("\n")
}

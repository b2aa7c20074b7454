//! Detailed multi-section text report

use chrono::{DateTime, Local};

use super::table::{format_table, format_thousands};
use crate::pipeline::ColumnReport;

const RULE_WIDTH: usize = 80;
const INDENT: &str = "   ";

/// Run metadata shown at the top of the detailed report
#[derive(Debug, Clone)]
pub struct ReportHeader {
    /// File name of the source (not the full path)
    pub source_name: String,
    pub generated_at: DateTime<Local>,
    /// Rows after sampling
    pub total_rows: usize,
    pub numeric_columns: usize,
    /// Original row count when sampling was applied
    pub sampled_from: Option<usize>,
    pub bins: usize,
    pub histogram_width: usize,
    pub show_all_stats: bool,
}

/// Render the full report: header block, statistics table, then one section
/// per column with its wide histogram.
pub fn format_detailed_report(header: &ReportHeader, reports: &[ColumnReport]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = vec![
        rule.clone(),
        format!("CSV ANALYSIS REPORT: {}", header.source_name),
        format!(
            "Generated: {}",
            header.generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
        format!(
            "Total Rows: {}, Numeric Columns: {}",
            format_thousands(header.total_rows),
            header.numeric_columns
        ),
    ];
    if let Some(original) = header.sampled_from {
        lines.push(format!(
            "Sampled: {} rows (from {})",
            format_thousands(header.total_rows),
            format_thousands(original)
        ));
    }
    lines.push(format!(
        "Histogram Bins: {}, Width: {} chars",
        header.bins, header.histogram_width
    ));
    lines.push(rule);
    lines.push(String::new());

    lines.push("SUMMARY STATISTICS:".to_string());
    lines.push(format_table(reports, header.show_all_stats));
    lines.push(String::new());

    lines.push("DETAILED HISTOGRAMS:".to_string());
    lines.push(String::new());

    for (i, report) in reports.iter().enumerate() {
        let stats = &report.statistics;
        lines.push(format!("{}. {}:", i + 1, stats.column));
        lines.push(format!(
            "{}Count: {}, Missing: {}",
            INDENT,
            format_thousands(stats.count),
            format_thousands(stats.missing)
        ));
        lines.push(format!(
            "{}Range: [{:.4}, {:.4}], Mean: {:.4}, Std: {:.4}",
            INDENT, stats.min, stats.max, stats.mean, stats.std
        ));
        lines.push(format!("{}Distribution:", INDENT));
        lines.extend(
            report
                .wide_histogram
                .lines()
                .map(|line| format!("{}{}", INDENT, line)),
        );
        lines.push(String::new());
    }

    lines.join("\n")
}

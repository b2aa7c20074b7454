//! Run summary card shown after a console report

use std::path::PathBuf;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use super::table::format_thousands;

/// Summary of an analysis run
#[derive(Debug, Default)]
pub struct AnalysisSummary {
    pub input: PathBuf,
    pub rows_analyzed: usize,
    pub columns_analyzed: usize,
    /// Rows in the file before sampling, when sampling was applied
    pub sampled_from: Option<usize>,
    pub bins: usize,
    /// Columns selected but skipped for lack of values
    pub columns_skipped: usize,
}

impl AnalysisSummary {
    pub fn new(input: PathBuf, bins: usize) -> Self {
        Self {
            input,
            bins,
            ..Default::default()
        }
    }

    pub fn set_rows(&mut self, rows_analyzed: usize, sampled_from: Option<usize>) {
        self.rows_analyzed = rows_analyzed;
        self.sampled_from = sampled_from;
    }

    pub fn set_columns(&mut self, selected: usize, analyzed: usize) {
        self.columns_analyzed = analyzed;
        self.columns_skipped = selected.saturating_sub(analyzed);
    }

    /// Build the summary table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 File"), Cell::new(self.input.display())]);

        table.add_row(vec![
            Cell::new("📊 Rows analyzed"),
            Cell::new(format_thousands(self.rows_analyzed)),
        ]);

        table.add_row(vec![
            Cell::new("📈 Columns analyzed"),
            Cell::new(self.columns_analyzed)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        if self.columns_skipped > 0 {
            table.add_row(vec![
                Cell::new("⏭️  Columns skipped"),
                Cell::new(self.columns_skipped).fg(Color::Yellow),
            ]);
        }

        if let Some(original) = self.sampled_from {
            table.add_row(vec![
                Cell::new("🎯 Sample size"),
                Cell::new(format!(
                    "{} of {}",
                    format_thousands(self.rows_analyzed),
                    format_thousands(original)
                ))
                .fg(Color::Cyan),
            ]);
        }

        table.add_row(vec![Cell::new("📐 Histogram bins"), Cell::new(self.bins)]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("✅").green(),
            style("ANALYSIS COMPLETE").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

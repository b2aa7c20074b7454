//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{AnalysisConfig, LoadOptions, DEFAULT_SEED};
use crate::report::{default_export_path, ExportFormat};

/// csvhisto - CSV summary statistics with inline ASCII histograms
#[derive(Parser, Debug)]
#[command(name = "csvhisto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to CSV file to analyze
    pub csv_file: PathBuf,

    /// Column names to analyze (default: all numeric columns).
    /// Accepts several values, each optionally comma-separated.
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Number of bins for histograms
    #[arg(short, long, default_value = "10", value_parser = validate_positive)]
    pub bins: usize,

    /// Sample size for large datasets (random sampling without replacement)
    #[arg(short, long, value_parser = validate_positive)]
    pub sample: Option<usize>,

    /// Width of ASCII histograms in characters
    #[arg(short = 'w', long, default_value = "20", value_parser = validate_positive)]
    pub histogram_width: usize,

    /// Export format. "txt" prints the report to the console unless --output is set
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Txt)]
    pub export: ExportFormat,

    /// Output file path for exported results.
    /// Defaults to the input directory with a '_statistics' suffix
    /// (e.g., data.csv → data_statistics.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show all statistics including skewness and kurtosis
    #[arg(short, long, default_value = "false")]
    pub all_stats: bool,

    /// Verbose output with progress information
    #[arg(short, long, default_value = "false", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Random seed for --sample
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Cli {
    /// Loader options derived from the arguments
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            sample_size: self.sample,
            columns: if self.columns.is_empty() {
                None
            } else {
                Some(self.columns.clone())
            },
            seed: self.seed,
        }
    }

    /// Statistics and histogram settings derived from the arguments
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            bins: self.bins,
            histogram_width: self.histogram_width,
            show_all_stats: self.all_stats,
        }
    }

    /// Where exported results go.
    ///
    /// Returns `None` for a txt export without `--output` (console output).
    pub fn export_path(&self) -> Option<PathBuf> {
        match (&self.output, self.export) {
            (Some(path), _) => Some(path.clone()),
            (None, ExportFormat::Txt) => None,
            (None, format) => Some(default_export_path(&self.csv_file, format)),
        }
    }
}

/// Validator for counts that must be at least 1
fn validate_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid positive integer", s))?;

    if value == 0 {
        Err("value must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

//! csvhisto: CSV Summary Statistics CLI Tool
//!
//! Computes per-column summary statistics for a CSV file and renders
//! inline and detailed ASCII histograms.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use csvhisto::cli::Cli;
use csvhisto::pipeline::{analyze_columns, collect_statistics, load_dataset};
use csvhisto::report::{
    default_export_path, export_statistics, export_text_report, format_detailed_report,
    AnalysisSummary, ExportFormat, ReportHeader,
};
use csvhisto::utils::{
    finish_with_success, maybe_spinner, print_banner, print_error, print_info, print_notice,
    print_step_header, print_step_time,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.verbose {
        print_banner(env!("CARGO_PKG_VERSION"));
    }

    // Step 1: Load dataset
    if cli.verbose {
        print_step_header(1, "Load Dataset");
    }
    let step_start = Instant::now();
    let spinner = maybe_spinner(cli.verbose, "Loading CSV file...");
    let loaded = load_dataset(&cli.csv_file, &cli.load_options())?;
    finish_with_success(
        &spinner,
        &format!(
            "Loaded {} rows, {} columns ({} numeric selected)",
            loaded.dataset.row_count(),
            loaded.dataset.column_count(),
            loaded.selection.len()
        ),
    );
    if cli.verbose {
        print_step_time(step_start.elapsed());
    }

    if !cli.quiet {
        for notice in &loaded.notices {
            print_notice(notice);
        }
    }

    // Step 2: Statistics and histograms
    if cli.verbose {
        print_step_header(2, "Statistics & Histograms");
    }
    let step_start = Instant::now();
    let config = cli.analysis_config();
    let spinner = maybe_spinner(cli.verbose, "Computing statistics...");
    let reports = analyze_columns(&loaded.dataset, &loaded.selection, &config)?;
    finish_with_success(&spinner, &format!("Analyzed {} column(s)", reports.len()));
    if cli.verbose {
        print_step_time(step_start.elapsed());
    }

    // Step 3: Report or export
    if cli.verbose {
        print_step_header(3, "Report");
    }
    let export_path = cli.export_path();
    match cli.export {
        ExportFormat::Txt => {
            let header = ReportHeader {
                source_name: source_name(&cli.csv_file),
                generated_at: Local::now(),
                total_rows: loaded.dataset.row_count(),
                numeric_columns: loaded.selection.len(),
                sampled_from: loaded.dataset.sampled_from(),
                bins: config.bins,
                histogram_width: config.histogram_width,
                show_all_stats: config.show_all_stats,
            };
            let text = format_detailed_report(&header, &reports);

            match &export_path {
                Some(path) => {
                    export_text_report(&text, path)?;
                    if !cli.quiet {
                        print_info(&format!("Report written to {}", path.display()));
                    }
                }
                None => println!("{}", text),
            }

            if !cli.quiet {
                let mut summary = AnalysisSummary::new(cli.csv_file.clone(), config.bins);
                summary.set_rows(loaded.dataset.row_count(), loaded.dataset.sampled_from());
                summary.set_columns(loaded.selection.len(), reports.len());
                summary.display();
            }
        }
        format => {
            let path = export_path.unwrap_or_else(|| default_export_path(&cli.csv_file, format));
            export_statistics(&collect_statistics(&reports), format, &path)?;
            if !cli.quiet {
                print_info(&format!("Statistics exported to {}", path.display()));
            }
        }
    }

    Ok(())
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

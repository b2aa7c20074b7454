//! Terminal styling utilities for console messages

use std::time::Duration;

use console::{style, Emoji};

use crate::pipeline::{Notice, NoticeLevel};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[INFO] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[WARNING] ");
pub static ERROR: Emoji<'_, '_> = Emoji("❌ ", "[ERROR] ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!("    {}{}", CHART, style("csvhisto").cyan().bold());
    println!(
        "    {}",
        style("CSV summary statistics with inline ASCII histograms").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}{}", INFO, message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}{}", WARNING, style(message).yellow());
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}{} {}", ERROR, style("Error:").red().bold(), message);
}

/// Print a loader notice at its level
pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => print_info(&notice.message),
        NoticeLevel::Warning => print_warning(&notice.message),
    }
}

/// Print elapsed time for a step
pub fn print_step_time(elapsed: Duration) {
    println!("      {}", style(format!("⏱ {:.2?}", elapsed)).dim());
}

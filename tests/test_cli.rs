//! Tests for CLI argument parsing and the csvhisto binary

use assert_cmd::Command;
use clap::Parser;
use csvhisto::cli::Cli;
use csvhisto::report::ExportFormat;
use predicates::prelude::*;
use std::path::PathBuf;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["csvhisto", "data.csv"]);

    assert_eq!(cli.csv_file, PathBuf::from("data.csv"));
    assert_eq!(cli.bins, 10, "Default bins should be 10");
    assert_eq!(cli.histogram_width, 20, "Default width should be 20");
    assert_eq!(cli.export, ExportFormat::Txt);
    assert_eq!(cli.seed, 42);
    assert!(cli.columns.is_empty());
    assert!(cli.sample.is_none());
    assert!(!cli.all_stats);
    assert!(!cli.quiet);
    assert!(cli.load_options().columns.is_none());
}

#[test]
fn test_cli_columns_space_and_comma_separated() {
    let cli = Cli::parse_from(["csvhisto", "data.csv", "-c", "a", "b,c"]);
    assert_eq!(cli.columns, vec!["a", "b", "c"]);
    assert_eq!(
        cli.load_options().columns,
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn test_cli_custom_settings() {
    let cli = Cli::parse_from([
        "csvhisto", "data.csv", "-b", "5", "-w", "40", "-s", "100", "-a",
    ]);

    let config = cli.analysis_config();
    assert_eq!(config.bins, 5);
    assert_eq!(config.histogram_width, 40);
    assert!(config.show_all_stats);
    assert_eq!(cli.load_options().sample_size, Some(100));
}

#[test]
fn test_cli_rejects_zero_bins() {
    let result = Cli::try_parse_from(["csvhisto", "data.csv", "--bins", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_export_format() {
    let result = Cli::try_parse_from(["csvhisto", "data.csv", "-e", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_export_path_derivation() {
    let cli = Cli::parse_from(["csvhisto", "/path/to/data.csv", "-e", "json"]);
    assert_eq!(
        cli.export_path(),
        Some(PathBuf::from("/path/to/data_statistics.json"))
    );

    let cli = Cli::parse_from(["csvhisto", "/path/to/data.csv"]);
    assert_eq!(cli.export_path(), None);

    let cli = Cli::parse_from(["csvhisto", "data.csv", "-e", "csv", "-o", "out.csv"]);
    assert_eq!(cli.export_path(), Some(PathBuf::from("out.csv")));
}

#[test]
fn test_binary_prints_report() {
    let (_dir, path) = common::create_temp_csv(common::SIMPLE_CSV);

    Command::cargo_bin("csvhisto")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV ANALYSIS REPORT: test_data.csv"))
        .stdout(predicate::str::contains("SUMMARY STATISTICS:"))
        .stdout(predicate::str::contains("1. age:"));
}

#[test]
fn test_binary_quiet_keeps_report_and_hides_warnings() {
    let (_dir, path) = common::create_temp_csv(common::SIMPLE_CSV);

    Command::cargo_bin("csvhisto")
        .unwrap()
        .arg(&path)
        .args(["-q", "-c", "age", "height"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. age:"))
        .stdout(predicate::str::contains("ANALYSIS COMPLETE").not())
        .stderr(predicate::str::contains("height").not());
}

#[test]
fn test_binary_warns_on_unknown_column() {
    let (_dir, path) = common::create_temp_csv(common::SIMPLE_CSV);

    Command::cargo_bin("csvhisto")
        .unwrap()
        .arg(&path)
        .args(["-c", "age", "height"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Column 'height' not found in CSV file"));
}

#[test]
fn test_binary_missing_file_fails() {
    Command::cargo_bin("csvhisto")
        .unwrap()
        .arg("/nonexistent/data.csv")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_binary_no_numeric_columns_fails() {
    let (_dir, path) = common::create_temp_csv("name\nAlice\nBob\n");

    Command::cargo_bin("csvhisto")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No numeric columns found"));
}

#[test]
fn test_binary_json_export() {
    let (dir, path) = common::create_temp_csv(common::SIMPLE_CSV);

    Command::cargo_bin("csvhisto")
        .unwrap()
        .arg(&path)
        .args(["-e", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics exported to"));

    let exported = dir.path().join("test_data_statistics.json");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(exported).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_binary_txt_to_file() {
    let (dir, path) = common::create_temp_csv(common::SIMPLE_CSV);
    let out = dir.path().join("report.txt");

    Command::cargo_bin("csvhisto")
        .unwrap()
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.contains("DETAILED HISTOGRAMS:"));
}

//! End-to-end tests: load, analyze, render

use chrono::Local;
use csvhisto::pipeline::{
    analyze_columns, collect_statistics, load_dataset, AnalysisConfig, AnalysisError, LoadOptions,
    INSUFFICIENT_DATA,
};
use csvhisto::report::{format_detailed_report, format_table, ReportHeader};

#[path = "common/mod.rs"]
mod common;

fn analyze(content: &str, config: AnalysisConfig) -> Vec<csvhisto::pipeline::ColumnReport> {
    let (_dir, path) = common::create_temp_csv(content);
    let loaded = load_dataset(&path, &LoadOptions::default()).unwrap();
    analyze_columns(&loaded.dataset, &loaded.selection, &config).unwrap()
}

#[test]
fn test_statistics_invariants() {
    let reports = analyze(&common::large_csv(257), AnalysisConfig::default());
    assert_eq!(reports.len(), 4);

    for report in &reports {
        let s = &report.statistics;
        assert!(s.min <= s.q25 && s.q25 <= s.median);
        assert!(s.median <= s.q75 && s.q75 <= s.max);
        assert_eq!(s.range, s.max - s.min);
        assert_eq!(s.iqr, s.q75 - s.q25);
        assert_eq!(s.count + s.missing, 257);
    }
}

#[test]
fn test_inline_histogram_length_matches_bins() {
    for bins in [1, 3, 10, 25] {
        let config = AnalysisConfig {
            bins,
            ..Default::default()
        };
        let reports = analyze(&common::large_csv(100), config);
        for report in &reports {
            assert_eq!(report.inline_histogram.chars().count(), bins);
            assert_eq!(report.wide_histogram.lines().count(), bins);
        }
    }
}

#[test]
fn test_selection_order_is_preserved() {
    let reports = analyze(common::CSV_WITH_MISSING, AnalysisConfig::default());
    let names: Vec<&str> = reports
        .iter()
        .map(|r| r.statistics.column.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_single_value_column_is_insufficient() {
    let reports = analyze("x,y\n1,5\n2,\n3,\n", AnalysisConfig::default());
    let y = reports.iter().find(|r| r.statistics.column == "y").unwrap();

    assert_eq!(y.statistics.count, 1);
    assert_eq!(y.statistics.std, 0.0);
    assert_eq!(y.inline_histogram, INSUFFICIENT_DATA);
    assert_eq!(y.wide_histogram, INSUFFICIENT_DATA);
}

#[test]
fn test_two_values_render_normally() {
    let reports = analyze("v\n1.0\n2.0\n", AnalysisConfig::default());
    assert_ne!(reports[0].inline_histogram, INSUFFICIENT_DATA);
    assert_eq!(reports[0].inline_histogram.chars().count(), 10);
}

#[test]
fn test_constant_column_renders() {
    let reports = analyze("v\n3\n3\n3\n3\n", AnalysisConfig::default());
    let r = &reports[0];
    assert_eq!(r.statistics.std, 0.0);
    assert_eq!(r.statistics.range, 0.0);
    assert_eq!(r.inline_histogram.chars().count(), 10);
    assert_eq!(r.inline_histogram.chars().filter(|&c| c == '█').count(), 1);
}

#[test]
fn test_all_stats_adds_shape() {
    let config = AnalysisConfig {
        show_all_stats: true,
        ..Default::default()
    };
    let reports = analyze(common::SIMPLE_CSV, config);
    assert!(reports.iter().all(|r| r.statistics.skew.is_some()));
    assert!(reports.iter().all(|r| r.statistics.kurtosis.is_some()));

    let table = format_table(&reports, true);
    assert!(table.lines().next().unwrap().contains("Kurt"));
}

#[test]
fn test_statistics_are_serializable() {
    let reports = analyze(common::SIMPLE_CSV, AnalysisConfig::default());
    let stats = collect_statistics(&reports);
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json[0]["column"], "age");
    assert_eq!(json[1]["column"], "salary");
    assert_eq!(json[1]["max"], 70000.0);
}

#[test]
fn test_detailed_report_end_to_end() {
    let reports = analyze(common::SIMPLE_CSV, AnalysisConfig::default());
    let header = ReportHeader {
        source_name: "test_data.csv".to_string(),
        generated_at: Local::now(),
        total_rows: 5,
        numeric_columns: 2,
        sampled_from: None,
        bins: 10,
        histogram_width: 20,
        show_all_stats: false,
    };

    let text = format_detailed_report(&header, &reports);

    assert!(text.contains("CSV ANALYSIS REPORT: test_data.csv"));
    assert!(text.contains("Total Rows: 5, Numeric Columns: 2"));
    assert!(text.contains("1. age:"));
    assert!(text.contains("2. salary:"));
    assert!(text.contains("   Range: [50000.0000, 70000.0000]"));
}

#[test]
fn test_dataset_level_histograms() {
    let (_dir, path) = common::create_temp_csv(common::SIMPLE_CSV);
    let loaded = load_dataset(&path, &LoadOptions::default()).unwrap();
    let ds = &loaded.dataset;

    let inline = ds.histogram_inline("age", 5).unwrap();
    assert_eq!(inline.chars().count(), 5);

    let wide = ds.histogram_wide("salary", 4, 10).unwrap();
    assert_eq!(wide.lines().count(), 4);
    assert!(wide.lines().all(|l| l.contains(" |")));

    // Text columns have no numeric values to bin
    assert_eq!(ds.histogram_inline("name", 5).unwrap(), INSUFFICIENT_DATA);
    assert!(ds.compute_statistics("name", false).unwrap().is_none());

    assert!(matches!(
        ds.histogram_wide("height", 4, 10),
        Err(AnalysisError::ColumnNotFound(_))
    ));
}

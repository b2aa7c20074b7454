//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Five people with a text column and two numeric columns
pub const SIMPLE_CSV: &str = "\
name,age,salary,department
Lens View,30,50000,Engineering
Crystal Kimalel,25,55000,Marketing
Sarah Mutoni,35,60000,Engineering
Lexy Chebet,28,52000,HR
Joshua Rakitch,40,70000,Engineering
";

/// One missing value in each column
pub const CSV_WITH_MISSING: &str = "\
A,B,C,D
1.0,2.0,3.0,4.0
5.0,,7.0,8.0
9.0,10.0,,12.0
13.0,14.0,15.0,
,18.0,19.0,20.0
";

/// Header names with punctuation and spaces
pub const CSV_SPECIAL_NAMES: &str = "\
col_with_underscore,col-with-dash,\"col with spaces\",col.with.dots
1,2,3,4
5,6,7,8
";

/// `id,value1,value2,value3` with `rows` rows
pub fn large_csv(rows: usize) -> String {
    let mut out = String::from("id,value1,value2,value3\n");
    for i in 0..rows {
        out.push_str(&format!(
            "{},{},{},{}\n",
            i,
            i as f64 * 1.5,
            i as f64 * 2.0,
            i as f64 * 0.5
        ));
    }
    out
}

/// Create a temporary directory with a CSV file holding `content`
pub fn create_temp_csv(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    (temp_dir, csv_path)
}

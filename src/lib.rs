//! csvhisto: CSV statistics library
//!
//! Loads a CSV file, infers typed columns, computes per-column summary
//! statistics and renders wide and inline ASCII histograms.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;

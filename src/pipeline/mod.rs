//! Pipeline module - loading, statistics and histograms

pub mod analysis;
pub mod error;
pub mod histogram;
pub mod loader;
pub mod schema;
pub mod statistics;

pub use analysis::*;
pub use error::*;
pub use histogram::*;
pub use loader::*;
pub use schema::*;
pub use statistics::*;

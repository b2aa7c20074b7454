//! Report module - tables, detailed reports and exports

pub mod detailed;
pub mod export;
pub mod summary;
pub mod table;

pub use detailed::*;
pub use export::*;
pub use summary::*;
pub use table::*;

//! Dataset store
//!
//! Immutable in-memory tables, one per platform, loaded from CSV at startup.

pub mod catalog;
pub mod table;

pub use catalog::DatasetStore;
pub use table::Table;

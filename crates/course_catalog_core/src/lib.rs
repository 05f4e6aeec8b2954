//! Course Catalog Core - read-only lookup and search over course datasets
//!
//! Four CSV catalogs (Udemy, Coursera clean, Coursera original, edX) are
//! loaded once into immutable tables. The `CatalogService` answers
//! first-match lookups, conjunctive filtered searches and a tagged
//! list-all over them, normalizing every row into JSON-safe records.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  HTTP handlers (course_catalog_server)        │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │  CatalogService ──► UrlLauncher (advisory)    │
//! │     filter::Criteria + normalize::normalize   │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │  DatasetStore: four immutable Tables (CSV)    │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use course_catalog_core::{CatalogConfig, CatalogService, DatasetStore};
//!
//! let config = CatalogConfig::load()?;
//! let store = Arc::new(DatasetStore::load(&config.datasets)?);
//! let service = CatalogService::from_config(store, config.browser);
//! let hits = service.search_udemy(&Default::default())?;
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod launcher;
pub mod normalize;
pub mod proto;
pub mod service;
pub mod store;
pub mod types;

pub use config::{BrowserConfig, CatalogConfig, ConfigError, DatasetSource, DatasetsConfig};
pub use error::CatalogError;
pub use filter::{Criteria, Criterion, CourseraSearch, EdxSearch, UdemySearch};
pub use launcher::{DisabledLauncher, LaunchError, LaunchOutcome, SystemBrowser, UrlLauncher};
pub use service::CatalogService;
pub use store::{DatasetStore, Table};
pub use types::{CellValue, KeyKind, LookupKey, Platform, Row};

//! course_catalog_server: REST surface for the course catalog.
//!
//! The binary loads every dataset before binding; the router here only
//! ever sees a fully loaded `CatalogService`.

pub mod error;
pub mod handlers;
pub mod router;

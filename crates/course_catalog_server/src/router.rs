//! Router construction for the course catalog server.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use course_catalog_core::CatalogService;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;

/// Build the full axum router. Literal `search` routes win over the
/// `:course_id` / `:course_title` captures on the same prefix.
pub fn build_router(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/courses/all", get(handlers::list::list_all_courses))
        // Search
        .route(
            "/courses/udemy/search",
            get(handlers::search::search_udemy_courses),
        )
        .route(
            "/courses/coursera/search",
            get(handlers::search::search_coursera_courses),
        )
        .route(
            "/courses/edx/search",
            get(handlers::search::search_edx_courses),
        )
        // Single-record lookups
        .route(
            "/courses/udemy/:course_id",
            get(handlers::lookup::get_udemy_course),
        )
        .route(
            "/courses/coursera_clean/:course_title",
            get(handlers::lookup::get_coursera_clean_course),
        )
        .route(
            "/courses/coursea_data/:course_id",
            get(handlers::lookup::get_coursea_data_course),
        )
        .route(
            "/courses/edx/:course_title",
            get(handlers::lookup::get_edx_course),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .layer(Extension(service))
}

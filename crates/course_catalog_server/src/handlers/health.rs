//! GET /health: dataset row counts.

use std::sync::Arc;

use axum::{Extension, Json};
use course_catalog_core::{proto::HealthResponse, CatalogService};

pub async fn health(Extension(service): Extension<Arc<CatalogService>>) -> Json<HealthResponse> {
    Json(service.health())
}

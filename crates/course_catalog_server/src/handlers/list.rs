//! GET /courses/all: every course from every platform, tagged.

use std::sync::Arc;

use axum::{Extension, Json};
use course_catalog_core::{proto::AllCoursesResponse, CatalogService};

use crate::error::AppError;

pub async fn list_all_courses(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Result<Json<AllCoursesResponse>, AppError> {
    let resp = tokio::task::spawn_blocking(move || service.list_all()).await?;
    Ok(Json(resp))
}

//! Single-record lookups. A hit may open the course page in a browser, so
//! the service call runs on the blocking pool. Unparseable path segments
//! are answered with the same `{"detail": ...}` body as every other error.
//!
//! GET /courses/udemy/:course_id
//! GET /courses/coursera_clean/:course_title
//! GET /courses/coursea_data/:course_id
//! GET /courses/edx/:course_title

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path},
    Extension, Json,
};
use course_catalog_core::{proto::CourseLookupResponse, CatalogService};

use crate::error::AppError;

pub async fn get_udemy_course(
    Extension(service): Extension<Arc<CatalogService>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CourseLookupResponse>, AppError> {
    let Path(course_id) = path?;
    let resp = tokio::task::spawn_blocking(move || service.get_udemy_course(course_id)).await??;
    Ok(Json(resp))
}

pub async fn get_coursera_clean_course(
    Extension(service): Extension<Arc<CatalogService>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CourseLookupResponse>, AppError> {
    let Path(course_title) = path?;
    let resp =
        tokio::task::spawn_blocking(move || service.get_coursera_clean_course(&course_title))
            .await??;
    Ok(Json(resp))
}

pub async fn get_coursea_data_course(
    Extension(service): Extension<Arc<CatalogService>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CourseLookupResponse>, AppError> {
    let Path(course_id) = path?;
    let resp =
        tokio::task::spawn_blocking(move || service.get_coursera_original_course(course_id))
            .await??;
    Ok(Json(resp))
}

pub async fn get_edx_course(
    Extension(service): Extension<Arc<CatalogService>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CourseLookupResponse>, AppError> {
    let Path(course_title) = path?;
    let resp = tokio::task::spawn_blocking(move || service.get_edx_course(&course_title)).await??;
    Ok(Json(resp))
}

//! Filtered search handlers. All query parameters are optional.
//!
//! GET /courses/udemy/search    : title, price_min, price_max, rating_min
//! GET /courses/coursera/search : title, skill, difficulty, language
//! GET /courses/edx/search      : title, university, subject

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query},
    Extension, Json,
};
use course_catalog_core::{
    proto::CourseSearchResponse, CatalogService, CourseraSearch, EdxSearch, UdemySearch,
};

use crate::error::AppError;

pub async fn search_udemy_courses(
    Extension(service): Extension<Arc<CatalogService>>,
    query: Result<Query<UdemySearch>, QueryRejection>,
) -> Result<Json<CourseSearchResponse>, AppError> {
    let Query(query) = query?;
    Ok(Json(service.search_udemy(&query)?))
}

pub async fn search_coursera_courses(
    Extension(service): Extension<Arc<CatalogService>>,
    query: Result<Query<CourseraSearch>, QueryRejection>,
) -> Result<Json<CourseSearchResponse>, AppError> {
    let Query(query) = query?;
    Ok(Json(service.search_coursera(&query)?))
}

pub async fn search_edx_courses(
    Extension(service): Extension<Arc<CatalogService>>,
    query: Result<Query<EdxSearch>, QueryRejection>,
) -> Result<Json<CourseSearchResponse>, AppError> {
    let Query(query) = query?;
    Ok(Json(service.search_edx(&query)?))
}

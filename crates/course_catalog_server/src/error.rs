//! HTTP mapping for catalog errors. Bodies are `{"detail": "..."}`.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use course_catalog_core::CatalogError;

#[derive(Debug)]
pub struct AppError(pub CatalogError);

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self(CatalogError::InvalidInput(format!(
            "Invalid path parameter: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self(CatalogError::InvalidInput(format!(
            "Invalid query parameters: {}",
            rejection.body_text()
        )))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self(CatalogError::Internal(anyhow::anyhow!(
            "blocking task failed: {err}"
        )))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Full cause goes to the log only; clients get the public detail.
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        let body = serde_json::json!({ "detail": self.0.public_detail() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: CatalogError) -> (StatusCode, serde_json::Value) {
        let resp = AppError(err).into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_detail() {
        let (status, body) = render(CatalogError::NotFound("Course ID not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "detail": "Course ID not found" }));
    }

    #[tokio::test]
    async fn internal_error_hides_cause() {
        let (status, body) = render(CatalogError::Internal(anyhow::anyhow!("disk on fire"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal Server Error");
    }

    #[tokio::test]
    async fn side_effect_maps_to_500() {
        let (status, body) = render(CatalogError::SideEffectFailed("xdg-open".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Failed to open course URL");
    }
}

//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use demo_core::DemoError;
use serde_json::json;

/// Error returned by route handlers
///
/// Not-found errors become 404 with a fixed detail message; anything else is
/// logged and surfaced as 500.
#[derive(Debug)]
pub struct ApiError(pub DemoError);

impl From<DemoError> for ApiError {
    fn from(e: DemoError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            DemoError::ArticleNotFound(_) => (StatusCode::NOT_FOUND, "Article not found".to_string()),
            DemoError::HeroNotFound(_) => (StatusCode::NOT_FOUND, "Hero not found".to_string()),
            other => {
                tracing::error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

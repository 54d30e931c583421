//! Shared helpers for router tests

use crate::storage::{ArticleCatalog, Database};
use crate::{build_router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a seeded catalog and a fresh database file
///
/// The returned directory must outlive the router.
pub async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.db");
    let db = Database::new(path.to_str().unwrap(), 1).await.unwrap();

    let state = AppState {
        articles: Arc::new(ArticleCatalog::seeded()),
        heroes: Arc::new(db),
    };
    (build_router(state), dir)
}

/// Send one request and decode the JSON response (`Null` for an empty body)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

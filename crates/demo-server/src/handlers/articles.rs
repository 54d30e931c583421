//! Article handlers (in-memory catalog)

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use demo_core::{Article, DemoError, VersionInfo};
use tracing::info;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles/:article_id", get(get_article))
        .route("/articles/", post(create_article))
        .route("/articles", post(create_article))
        .route("/info/", post(version_info))
        .route("/info", post(version_info))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    let article = state
        .articles
        .get_article(article_id)
        .await?
        .ok_or(DemoError::ArticleNotFound(article_id))?;

    Ok(Json(article))
}

pub async fn create_article(
    State(state): State<AppState>,
    Json(article): Json<Article>,
) -> Result<Json<Article>, ApiError> {
    let id = state.articles.create_article(article.clone()).await?;
    info!("Created article {}: {}", id, article.name);

    Ok(Json(article))
}

/// The body is validated as an article and otherwise unused
pub async fn version_info(Json(_article): Json<Article>) -> Json<VersionInfo> {
    Json(VersionInfo::default())
}

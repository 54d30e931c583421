//! Hero handlers (SQLite)

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use demo_core::{DemoError, Hero, HeroCreate};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/heroes/", get(list).post(create))
        .route("/heroes", get(list).post(create))
        .route("/heroes/:hero_id", get(get_hero))
}

pub async fn create(
    State(state): State<AppState>,
    Json(hero): Json<HeroCreate>,
) -> Result<Json<Hero>, ApiError> {
    let hero = state.heroes.create_hero(&hero).await?;
    Ok(Json(hero))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Hero>>, ApiError> {
    let heroes = state.heroes.list_heroes().await?;
    Ok(Json(heroes))
}

pub async fn get_hero(
    State(state): State<AppState>,
    Path(hero_id): Path<i64>,
) -> Result<Json<Hero>, ApiError> {
    let hero = state
        .heroes
        .get_hero(hero_id)
        .await?
        .ok_or(DemoError::HeroNotFound(hero_id))?;

    Ok(Json(hero))
}

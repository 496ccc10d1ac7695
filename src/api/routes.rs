use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use crate::{
    api::{error::ApiError, state::AppState},
    domain::GameRecord,
    services::CollectionUpdate,
};

pub const NO_GAMES_FOUND: &str = "No games found in collection";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/api/updateCollection", get(update_collection))
        .route("/api/checkUpdates", post(check_updates))
        .route("/api/games", get(list_games))
}

#[derive(Debug, Deserialize)]
pub struct CollectionQuery {
    pub username: String,
}

async fn welcome() -> (StatusCode, String) {
    (StatusCode::OK, "Welcome to this sort-of-funny API".to_string())
}

async fn update_collection(
    State(state): State<AppState>,
    Query(query): Query<CollectionQuery>,
) -> Result<Response, ApiError> {
    let update = state
        .sync
        .update_collection(&query.username)
        .await
        .map_err(|e| {
            error!("Failed to update collection of {}: {}", query.username, e);
            ApiError::from(e)
        })?;

    Ok(match update {
        CollectionUpdate::NotFound => (StatusCode::NOT_FOUND, NO_GAMES_FOUND).into_response(),
        CollectionUpdate::Updated { new_entries, total } => Html(format!(
            "Collection updated successfully.<br>New entries added: {}.<br>Total games in the database: {}",
            new_entries, total
        ))
        .into_response(),
    })
}

async fn check_updates(State(state): State<AppState>) -> Result<(StatusCode, String), ApiError> {
    state.sync.refresh_all().await.map_err(|e| {
        error!("Failed to refresh stored games: {}", e);
        ApiError::from(e)
    })?;
    Ok((StatusCode::OK, "Games updated successfully".to_string()))
}

async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameRecord>>, ApiError> {
    state.sync.store().load_all().map(Json).map_err(|e| {
        error!("Failed to load stored games: {}", e);
        ApiError::from(e)
    })
}

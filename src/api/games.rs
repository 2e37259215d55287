use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::{require_field, validate_game_id, validate_price};
use super::{ApiError, ApiResponse, AppState, MessageResponse};
use crate::clients::cheapshark::GameSearchResult;
use crate::db::Game;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// GET /games
pub async fn list_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Game>>>, ApiError> {
    let games = state.catalog().list_games().await?;
    Ok(Json(ApiResponse::success(games)))
}

/// POST /games
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    let Json(payload) = payload?;
    let id = payload
        .id
        .ok_or_else(|| ApiError::validation("Game id is required"))
        .and_then(validate_game_id)?;
    let name = require_field(payload.name.as_deref(), "Game name")?;
    let price = payload
        .price
        .ok_or_else(|| ApiError::validation("Game price is required"))
        .and_then(validate_price)?;

    state.catalog().create_game(id, name, price).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MessageResponse::new(format!(
            "Game {name} added"
        )))),
    ))
}

/// DELETE /games/{id}
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validate_game_id(id)?;
    state.catalog().delete_game(id).await?;

    Ok(Json(ApiResponse::success(MessageResponse::new(format!(
        "Game with id {id} deleted"
    )))))
}

/// GET /game-info/{id}
///
/// Looks the id up upstream. An unknown id is `data: null`, not an error.
pub async fn game_info(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Option<GameSearchResult>>>, ApiError> {
    let id = validate_game_id(id)?;
    let info = state.cheapshark().get_game_info(id).await?;
    Ok(Json(ApiResponse::success(info)))
}

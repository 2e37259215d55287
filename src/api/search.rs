use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_search_query;
use super::{ApiError, ApiResponse, AppState};
use crate::clients::cheapshark::GameSearchResult;

/// GET /search-games/{keyword}
pub async fn search_games(
    State(state): State<Arc<AppState>>,
    Path(keyword): Path<String>,
) -> Result<Json<ApiResponse<Vec<GameSearchResult>>>, ApiError> {
    let keyword = validate_search_query(&keyword)?;
    let results = state.cheapshark().search_for_games(keyword).await?;
    Ok(Json(ApiResponse::success(results)))
}

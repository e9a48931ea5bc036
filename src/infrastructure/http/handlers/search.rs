//! Card Search Handler

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::SearchCards;
use crate::infrastructure::http::dto::SearchResponse;
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::state::AppState;

/// 卡牌搜索
pub async fn search_cards(
    State(state): State<Arc<AppState>>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = SearchCards {
        q: params.remove("q"),
        name: params.remove("name"),
        set: params.remove("set"),
        rarity: params.remove("rarity"),
        types: params.remove("types"),
        page: params.remove("page"),
        page_size: params.remove("pageSize"),
    };

    let result = state
        .search_cards_handler
        .handle(query)
        .await
        .map_err(|e| ApiError::from_application(e, messages::SEARCH_FAILED))?;

    Ok(Json(SearchResponse::from(result)))
}

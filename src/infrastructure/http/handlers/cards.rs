//! Cards-by-Set Handler

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ListCardsBySet;
use crate::infrastructure::http::dto::CardsResponse;
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::state::AppState;

/// 按系列列出卡牌，`setId` 必填
pub async fn list_cards_by_set(
    State(state): State<Arc<AppState>>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<CardsResponse>, ApiError> {
    let query = ListCardsBySet {
        set_id: params.remove("setId"),
        page: params.remove("page"),
        page_size: params.remove("pageSize"),
        order_by: params.remove("orderBy"),
    };

    let result = state
        .list_cards_by_set_handler
        .handle(query)
        .await
        .map_err(|e| ApiError::from_application(e, messages::CARDS_FAILED))?;

    Ok(Json(CardsResponse::from(result)))
}

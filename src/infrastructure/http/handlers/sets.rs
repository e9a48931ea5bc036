//! Sets Handler

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ListSets;
use crate::infrastructure::http::dto::SetsResponse;
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::state::AppState;

/// 系列列表
///
/// 查询参数按 map 读取，重复的键以最后一个为准。
pub async fn list_sets(
    State(state): State<Arc<AppState>>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<SetsResponse>, ApiError> {
    let query = ListSets {
        page: params.remove("page"),
        page_size: params.remove("pageSize"),
        search: params.remove("search"),
    };

    let result = state
        .list_sets_handler
        .handle(query)
        .await
        .map_err(|e| ApiError::from_application(e, messages::SETS_FAILED))?;

    Ok(Json(SetsResponse::from(result)))
}

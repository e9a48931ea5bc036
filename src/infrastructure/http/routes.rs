//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET       健康检查
//! - /api/pokemon/sets         GET/POST  系列列表
//! - /api/pokemon/cards        GET/POST  按系列列出卡牌
//! - /api/pokemon/search       GET/POST  卡牌搜索
//! - /.netlify/functions/pokemon-{sets,cards,search}  同上（兼容旧前端路径）
//!
//! POST 与 GET 等价，只读取查询字符串

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .nest("/.netlify/functions", function_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/pokemon", pokemon_routes())
}

/// Pokemon 路由
fn pokemon_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sets", get(handlers::list_sets).post(handlers::list_sets))
        .route(
            "/cards",
            get(handlers::list_cards_by_set).post(handlers::list_cards_by_set),
        )
        .route("/search", get(handlers::search_cards).post(handlers::search_cards))
}

/// 兼容 Netlify Functions 路径
fn function_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/pokemon-sets",
            get(handlers::list_sets).post(handlers::list_sets),
        )
        .route(
            "/pokemon-cards",
            get(handlers::list_cards_by_set).post(handlers::list_cards_by_set),
        )
        .route(
            "/pokemon-search",
            get(handlers::search_cards).post(handlers::search_cards),
        )
}

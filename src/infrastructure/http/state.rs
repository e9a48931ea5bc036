//! Application State
//!
//! 只读共享状态：各查询处理器共用同一个上游端口

use std::sync::Arc;

use crate::application::{
    CatalogApiPort, ListCardsBySetHandler, ListSetsHandler, SearchCardsHandler,
};

/// 应用状态
pub struct AppState {
    pub list_sets_handler: ListSetsHandler,
    pub list_cards_by_set_handler: ListCardsBySetHandler,
    pub search_cards_handler: SearchCardsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(catalog: Arc<dyn CatalogApiPort>) -> Self {
        Self {
            list_sets_handler: ListSetsHandler::new(catalog.clone()),
            list_cards_by_set_handler: ListCardsBySetHandler::new(catalog.clone()),
            search_cards_handler: SearchCardsHandler::new(catalog),
        }
    }
}

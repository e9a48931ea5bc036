//! Card Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CatalogApiPort;
use crate::application::queries::{ListCardsBySet, SearchCards};
use crate::domain::catalog::{
    CardDetail, CardSearch, CardSetSummary, CardSummary, CardsBySetQuery, PageMeta, SetId,
};

// ============================================================================
// Results
// ============================================================================

/// 按系列列卡结果
#[derive(Debug, Clone)]
pub struct CardsBySetResult {
    pub cards: Vec<CardDetail>,
    pub meta: PageMeta,
    /// 第一张卡的系列信息，无卡时为 None
    pub set_info: Option<CardSetSummary>,
}

/// 搜索结果
#[derive(Debug, Clone)]
pub struct SearchCardsResult {
    pub cards: Vec<CardSummary>,
    pub meta: PageMeta,
    /// 实际使用的（未编码）搜索表达式
    pub query: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListCardsBySet Handler
pub struct ListCardsBySetHandler {
    catalog: Arc<dyn CatalogApiPort>,
}

impl ListCardsBySetHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: ListCardsBySet) -> Result<CardsBySetResult, ApplicationError> {
        let set_id = SetId::new(query.set_id.unwrap_or_default())
            .map_err(ApplicationError::validation)?;
        let cards_query = CardsBySetQuery::new(set_id, query.page, query.page_size, query.order_by);

        tracing::info!(set_id = %cards_query.set_id, "Fetching Pokemon cards for set");

        let (records, meta) = self
            .catalog
            .fetch_cards(&cards_query.to_query_string())
            .await?
            .into_parts();
        let cards: Vec<CardDetail> = records.into_iter().map(CardDetail::from).collect();
        let set_info = cards.first().map(|card| card.set.clone());

        tracing::info!(
            set_id = %cards_query.set_id,
            count = cards.len(),
            "Returned Pokemon cards for set"
        );

        Ok(CardsBySetResult {
            cards,
            meta,
            set_info,
        })
    }
}

/// SearchCards Handler
pub struct SearchCardsHandler {
    catalog: Arc<dyn CatalogApiPort>,
}

impl SearchCardsHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: SearchCards) -> Result<SearchCardsResult, ApplicationError> {
        let search = CardSearch::new(
            query.q,
            query.name,
            query.set,
            query.rarity,
            query.types,
            query.page,
            query.page_size,
        );
        let expression = search.expression();

        tracing::info!(query = %expression, "Searching Pokemon cards");

        let (records, meta) = self
            .catalog
            .fetch_cards(&search.to_query_string())
            .await?
            .into_parts();
        let cards: Vec<CardSummary> = records.into_iter().map(CardSummary::from).collect();

        tracing::info!(query = %expression, count = cards.len(), "Found Pokemon cards");

        Ok(SearchCardsResult {
            cards,
            meta,
            query: expression,
        })
    }
}

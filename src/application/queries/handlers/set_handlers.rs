//! Set Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CatalogApiPort;
use crate::application::queries::ListSets;
use crate::domain::catalog::{PageMeta, SetView, SetsQuery};

/// 系列列表结果
#[derive(Debug, Clone)]
pub struct SetsResult {
    pub sets: Vec<SetView>,
    pub meta: PageMeta,
}

/// ListSets Handler
pub struct ListSetsHandler {
    catalog: Arc<dyn CatalogApiPort>,
}

impl ListSetsHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: ListSets) -> Result<SetsResult, ApplicationError> {
        let query_string = SetsQuery::new(query.page, query.page_size, query.search).to_query_string();

        tracing::info!(query = %query_string, "Fetching Pokemon sets");

        let (records, meta) = self.catalog.fetch_sets(&query_string).await?.into_parts();
        let sets: Vec<SetView> = records.into_iter().map(SetView::from).collect();

        tracing::info!(count = sets.len(), "Returned Pokemon sets");

        Ok(SetsResult { sets, meta })
    }
}

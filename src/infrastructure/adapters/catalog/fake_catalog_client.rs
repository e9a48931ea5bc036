//! Fake Catalog Client - 用于测试的上游客户端
//!
//! 返回预设的 JSON 或状态码，并记录每次请求的路径与查询字符串

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::application::ports::{CatalogApiPort, CatalogError};
use crate::domain::catalog::{CardRecord, CatalogPage, SetRecord};

/// 预设响应
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// 2xx，响应体按真实客户端一样反序列化
    Json(Value),
    /// 非 2xx 状态
    Status(u16),
}

impl FakeResponse {
    fn empty_page() -> Self {
        Self::Json(json!({
            "data": [],
            "page": 1,
            "pageSize": 0,
            "count": 0,
            "totalCount": 0
        }))
    }
}

/// Fake Catalog Client
pub struct FakeCatalogClient {
    sets: FakeResponse,
    cards: FakeResponse,
    requests: Mutex<Vec<String>>,
}

impl Default for FakeCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeCatalogClient {
    /// 两个资源都返回空页
    pub fn new() -> Self {
        Self {
            sets: FakeResponse::empty_page(),
            cards: FakeResponse::empty_page(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 所有请求都返回指定状态码
    pub fn failing_with(status: u16) -> Self {
        Self {
            sets: FakeResponse::Status(status),
            cards: FakeResponse::Status(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_sets(mut self, body: Value) -> Self {
        self.sets = FakeResponse::Json(body);
        self
    }

    pub fn with_cards(mut self, body: Value) -> Self {
        self.cards = FakeResponse::Json(body);
        self
    }

    /// 已记录的请求（`/{resource}?{query}`）
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn respond<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &str,
        response: &FakeResponse,
    ) -> Result<CatalogPage<T>, CatalogError> {
        self.requests
            .lock()
            .await
            .push(format!("/{}?{}", resource, query));

        match response {
            FakeResponse::Status(status) => Err(CatalogError::Status(*status)),
            FakeResponse::Json(body) => serde_json::from_value(body.clone())
                .map_err(|e| CatalogError::InvalidResponse(e.to_string())),
        }
    }
}

#[async_trait]
impl CatalogApiPort for FakeCatalogClient {
    async fn fetch_sets(&self, query: &str) -> Result<CatalogPage<SetRecord>, CatalogError> {
        self.respond("sets", query, &self.sets).await
    }

    async fn fetch_cards(&self, query: &str) -> Result<CatalogPage<CardRecord>, CatalogError> {
        self.respond("cards", query, &self.cards).await
    }
}

//! HTTP Catalog Client - 调用 Pokemon TCG API
//!
//! 实现 CatalogApiPort trait
//!
//! 上游 API:
//! GET https://api.pokemontcg.io/v2/sets?page=..&pageSize=..
//! GET https://api.pokemontcg.io/v2/cards?q=..&page=..&pageSize=..&orderBy=..
//! Header: X-Api-Key

use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::application::ports::{CatalogApiPort, CatalogError};
use crate::domain::catalog::{CardRecord, CatalogPage, SetRecord};

/// API Key 请求头
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP Catalog 客户端配置
#[derive(Debug, Clone)]
pub struct HttpCatalogClientConfig {
    /// 上游基础 URL（不含末尾 `/`）
    pub base_url: String,
    /// API Key，为空时仍然发送（由上游拒绝）
    pub api_key: String,
    /// 请求超时时间（秒），0 表示使用 reqwest 默认（不超时）
    pub timeout_secs: u64,
}

impl Default for HttpCatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.pokemontcg.io/v2".to_string(),
            api_key: String::new(),
            timeout_secs: 0,
        }
    }
}

impl HttpCatalogClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Catalog 客户端
pub struct HttpCatalogClient {
    client: Client,
    config: HttpCatalogClientConfig,
}

impl HttpCatalogClient {
    /// 创建新的客户端
    pub fn new(config: HttpCatalogClientConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 拼接资源 URL，查询字符串原样附加
    fn resource_url(&self, resource: &str, query: &str) -> String {
        format!(
            "{}/{}?{}",
            self.config.base_url.trim_end_matches('/'),
            resource,
            query
        )
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &str,
    ) -> Result<CatalogPage<T>, CatalogError> {
        let url = self.resource_url(resource, query);

        tracing::debug!(url = %url, "Sending catalog request");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else if e.is_connect() {
                    CatalogError::NetworkError(format!("Cannot connect to catalog API: {}", e))
                } else {
                    CatalogError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Catalog API returned error status");
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<CatalogPage<T>>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl CatalogApiPort for HttpCatalogClient {
    async fn fetch_sets(&self, query: &str) -> Result<CatalogPage<SetRecord>, CatalogError> {
        self.get_page("sets", query).await
    }

    async fn fetch_cards(&self, query: &str) -> Result<CatalogPage<CardRecord>, CatalogError> {
        self.get_page("cards", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpCatalogClientConfig::default();
        assert_eq!(config.base_url, "https://api.pokemontcg.io/v2");
        assert_eq!(config.timeout_secs, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpCatalogClientConfig::new("http://localhost:9000", "secret").with_timeout(10);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_resource_url_keeps_query_verbatim() {
        let client =
            HttpCatalogClient::new(HttpCatalogClientConfig::new("http://localhost:9000/", "k")).unwrap();
        assert_eq!(
            client.resource_url("sets", "page=1&pageSize=20&q=name:\"Base\""),
            "http://localhost:9000/sets?page=1&pageSize=20&q=name:\"Base\""
        );
    }
}

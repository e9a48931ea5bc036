//! Catalog API Port - 上游卡牌目录服务抽象
//!
//! 具体实现在 infrastructure/adapters 层。端口接收已经拼好的查询字符串，
//! 上游看到的查询与领域层构造的结果逐字符一致。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{CardRecord, CatalogPage, SetRecord};

/// 上游调用错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 上游返回非 2xx 状态
    #[error("Pokemon API error: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Catalog API Port
///
/// 每次调用恰好发起一次上游 GET 请求，不重试。
#[async_trait]
pub trait CatalogApiPort: Send + Sync {
    /// `GET {base}/sets?{query}`
    async fn fetch_sets(&self, query: &str) -> Result<CatalogPage<SetRecord>, CatalogError>;

    /// `GET {base}/cards?{query}`
    async fn fetch_cards(&self, query: &str) -> Result<CatalogPage<CardRecord>, CatalogError>;
}

//! Data Transfer Objects
//!
//! 统一响应信封: `{ success, data, totalCount, page, pageSize, count, ...extras }`

use serde::Serialize;

use crate::application::{CardsBySetResult, SearchCardsResult, SetsResult};
use crate::domain::catalog::{CardDetail, CardSetSummary, CardSummary, PageMeta, SetView};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 成功的分页响应主体
#[derive(Debug, Serialize)]
pub struct PageEnvelope<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl<T: Serialize> PageEnvelope<T> {
    pub fn success(data: Vec<T>, meta: PageMeta) -> Self {
        Self {
            success: true,
            data,
            meta,
        }
    }
}

/// 失败响应
///
/// 400 只带 `message`；500 同时带底层错误信息 `error`。
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error: Option<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

// ============================================================================
// Handler 响应
// ============================================================================

pub type SetsResponse = PageEnvelope<SetView>;

impl From<SetsResult> for SetsResponse {
    fn from(result: SetsResult) -> Self {
        PageEnvelope::success(result.sets, result.meta)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsResponse {
    #[serde(flatten)]
    pub page: PageEnvelope<CardDetail>,
    pub set_info: Option<CardSetSummary>,
}

impl From<CardsBySetResult> for CardsResponse {
    fn from(result: CardsBySetResult) -> Self {
        Self {
            page: PageEnvelope::success(result.cards, result.meta),
            set_info: result.set_info,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub page: PageEnvelope<CardSummary>,
    pub query: String,
}

impl From<SearchCardsResult> for SearchResponse {
    fn from(result: SearchCardsResult) -> Self {
        Self {
            page: PageEnvelope::success(result.cards, result.meta),
            query: result.query,
        }
    }
}

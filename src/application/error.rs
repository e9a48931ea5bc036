//! 应用层错误定义
//!
//! 只有两类错误：参数校验失败、上游调用失败

use thiserror::Error;

use crate::application::ports::CatalogError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（不会发起上游请求）
    #[error("{0}")]
    ValidationError(String),

    /// 上游错误（网络、非 2xx 状态、响应解析）
    #[error(transparent)]
    Upstream(#[from] CatalogError),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

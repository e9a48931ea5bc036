//! HTTP Error Handling
//!
//! 校验错误 -> 400，其余一律 -> 500，并附带各 handler 固定的提示语

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorEnvelope;
use crate::application::ApplicationError;

/// 各 handler 的用户提示语
pub mod messages {
    pub const SETS_FAILED: &str = "Errore nel caricamento set Pokemon";
    pub const CARDS_FAILED: &str = "Errore nel caricamento carte Pokemon";
    pub const SEARCH_FAILED: &str = "Errore nella ricerca carte Pokemon";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream {
        error: String,
        message: &'static str,
    },
}

impl ApiError {
    /// 按 handler 的提示语转换应用层错误
    pub fn from_application(err: ApplicationError, message: &'static str) -> Self {
        match err {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::Upstream(e) => ApiError::Upstream {
                error: e.to_string(),
                message,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorEnvelope::new(None, msg))
            }
            ApiError::Upstream { error, message } => {
                tracing::error!(error = %error, "Pokemon API error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope::new(Some(error), message),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（CatalogApi）
//! - queries: 查询及处理器（系列列表、按系列列卡、卡牌搜索）
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{CatalogApiPort, CatalogError};

pub use queries::{
    handlers::{
        CardsBySetResult, ListCardsBySetHandler, ListSetsHandler, SearchCardsHandler,
        SearchCardsResult, SetsResult,
    },
    ListCardsBySet, ListSets, SearchCards,
};

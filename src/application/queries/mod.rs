//! 应用层 - 查询（读操作）
//!
//! 所有用例都是只读的上游查询

mod catalog_queries;

pub mod handlers;

pub use catalog_queries::*;

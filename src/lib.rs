//! Pokecards - Pokemon TCG API 代理服务
//!
//! 三个无状态查询端点（系列列表、按系列列卡、卡牌搜索），
//! 把上游响应裁剪成精简结构，并统一附带 CORS 头。
//!
//! 领域层 (domain/):
//! - Catalog Context: 查询构造与字段投影
//!
//! 应用层 (application/):
//! - Ports: CatalogApiPort
//! - Queries: ListSets, ListCardsBySet, SearchCards
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP Catalog Client
//! - HTTP: 路由、CORS、错误信封

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod catalog_api;

pub use catalog_api::{CatalogApiPort, CatalogError};

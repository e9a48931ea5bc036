//! Catalog Adapter - 上游卡牌目录 HTTP 客户端实现

mod fake_catalog_client;
mod http_catalog_client;

pub use fake_catalog_client::{FakeCatalogClient, FakeResponse};
pub use http_catalog_client::*;

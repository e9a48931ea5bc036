//! Catalog Context - 卡牌目录限界上下文
//!
//! 职责:
//! - 入站参数 -> 上游查询字符串
//! - 上游记录 -> 精简输出记录（字段白名单投影）

mod entities;
mod value_objects;

pub use entities::{
    CardDetail, CardImages, CardImagesRecord, CardRecord, CardSetRecord, CardSetSummary,
    CardSummary, CatalogPage, PageMeta, SetRecord, SetView,
};
pub use value_objects::{
    encode_uri_component, CardSearch, CardsBySetQuery, SetId, SetsQuery, DEFAULT_SEARCH_CLAUSE,
};

//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Catalog Context: 卡牌目录（系列、卡牌）的查询构造与字段投影

pub mod catalog;

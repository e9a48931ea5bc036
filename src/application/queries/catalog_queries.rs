//! Catalog Queries
//!
//! 原始入站参数，`None` 表示参数缺失

/// 系列列表查询
#[derive(Debug, Clone, Default)]
pub struct ListSets {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
}

/// 按系列列出卡牌查询
#[derive(Debug, Clone, Default)]
pub struct ListCardsBySet {
    pub set_id: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub order_by: Option<String>,
}

/// 卡牌搜索查询
#[derive(Debug, Clone, Default)]
pub struct SearchCards {
    pub q: Option<String>,
    pub name: Option<String>,
    pub set: Option<String>,
    pub rarity: Option<String>,
    pub types: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

//! Catalog Context - Entities
//!
//! 上游记录（只读取需要的字段）与对外输出的投影记录。
//! 透传字段统一用 `Option<Value>`：键缺失时 `None`（输出中省略），
//! 显式 `null` 与任意类型的值原样保留。
//! `types`/`subtypes` 缺失或为 `null` 时为空数组；价格字段缺失或为 `null` 时为 `null`。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 键存在即 `Some`，包括 `null`
///
/// 与 `#[serde(default)]` 搭配，键缺失时才是 `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 缺失或 `null` 时返回空数组，其余原样保留
fn or_empty_array(value: Option<Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(value) => value,
    }
}

/// 缺失时返回 `null`
fn or_null(value: Option<Value>) -> Value {
    value.unwrap_or(Value::Null)
}

// ============================================================================
// 上游分页
// ============================================================================

/// 上游分页响应
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage<T> {
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "present")]
    pub page: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub page_size: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub count: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub total_count: Option<Value>,
}

impl<T> CatalogPage<T> {
    /// 拆分为记录与分页信息
    pub fn into_parts(self) -> (Vec<T>, PageMeta) {
        let meta = PageMeta {
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            count: self.count,
        };
        (self.data, meta)
    }
}

/// 分页信息，直接取自上游
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<Value>,
}

// ============================================================================
// Sets
// ============================================================================

/// 上游系列记录
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub series: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub total: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub release_date: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub images: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub legalities: Option<Value>,
}

/// 系列输出记录，所有字段原样透传
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legalities: Option<Value>,
}

impl From<SetRecord> for SetView {
    fn from(record: SetRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            series: record.series,
            total: record.total,
            release_date: record.release_date,
            images: record.images,
            legalities: record.legalities,
        }
    }
}

// ============================================================================
// Cards
// ============================================================================

/// 上游卡牌中的系列信息
#[derive(Debug, Clone, Deserialize)]
pub struct CardSetRecord {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub series: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub total: Option<Value>,
}

/// 上游卡牌图片
#[derive(Debug, Clone, Deserialize)]
pub struct CardImagesRecord {
    #[serde(default, deserialize_with = "present")]
    pub small: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub large: Option<Value>,
}

/// 上游卡牌记录
///
/// `set` 与 `images` 必须是对象，否则视为上游响应无效。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub number: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub rarity: Option<Value>,
    pub set: CardSetRecord,
    pub images: CardImagesRecord,
    #[serde(default)]
    pub types: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub supertype: Option<Value>,
    #[serde(default)]
    pub subtypes: Option<Value>,
    #[serde(default)]
    pub tcgplayer: Option<Value>,
    #[serde(default)]
    pub cardmarket: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub artist: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub flavor_text: Option<Value>,
}

/// 卡牌所属系列摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<Value>,
}

impl From<CardImagesRecord> for CardImages {
    fn from(record: CardImagesRecord) -> Self {
        Self {
            small: record.small,
            large: record.large,
        }
    }
}

/// 按系列列卡时的完整投影
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Value>,
    pub set: CardSetSummary,
    pub images: CardImages,
    pub types: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supertype: Option<Value>,
    pub subtypes: Value,
    pub tcgplayer: Value,
    pub cardmarket: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<Value>,
}

impl From<CardRecord> for CardDetail {
    fn from(card: CardRecord) -> Self {
        Self {
            id: card.id,
            name: card.name,
            number: card.number,
            rarity: card.rarity,
            set: CardSetSummary {
                id: card.set.id,
                name: card.set.name,
                series: card.set.series,
                total: card.set.total,
            },
            images: card.images.into(),
            types: or_empty_array(card.types),
            supertype: card.supertype,
            subtypes: or_empty_array(card.subtypes),
            tcgplayer: or_null(card.tcgplayer),
            cardmarket: or_null(card.cardmarket),
            artist: card.artist,
            flavor_text: card.flavor_text,
        }
    }
}

/// 搜索结果投影（字段比 [`CardDetail`] 少）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Value>,
    pub set: CardSetSummary,
    pub images: CardImages,
    pub types: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supertype: Option<Value>,
    pub tcgplayer: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Value>,
}

impl From<CardRecord> for CardSummary {
    fn from(card: CardRecord) -> Self {
        Self {
            id: card.id,
            name: card.name,
            number: card.number,
            rarity: card.rarity,
            set: CardSetSummary {
                id: card.set.id,
                name: card.set.name,
                series: card.set.series,
                total: None,
            },
            images: card.images.into(),
            types: or_empty_array(card.types),
            supertype: card.supertype,
            tcgplayer: or_null(card.tcgplayer),
            artist: card.artist,
        }
    }
}

//! Catalog Context - Value Objects
//!
//! 上游查询字符串的构造规则。上游的查询语法（`field:value`、`AND`、`*` 通配）
//! 是外部契约，这里逐字符复现，不做额外转义。

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const DEFAULT_PAGE: &str = "1";
const DEFAULT_SETS_PAGE_SIZE: &str = "20";
const DEFAULT_CARDS_PAGE_SIZE: &str = "250";
const DEFAULT_CARDS_ORDER_BY: &str = "number";
const DEFAULT_SEARCH_PAGE_SIZE: &str = "20";
const SEARCH_ORDER_BY: &str = "set.releaseDate";

/// 没有任何搜索条件时使用的默认子句
pub const DEFAULT_SEARCH_CLAUSE: &str = "supertype:pokemon";

/// 与 `encodeURIComponent` 相同的保留字符集
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 按 `encodeURIComponent` 规则编码
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// 空字符串视为未提供
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 系列列表查询
///
/// 参数全部按不透明字符串处理，不做数值校验；默认值只在参数缺失时生效。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetsQuery {
    pub page: String,
    pub page_size: String,
    pub search: Option<String>,
}

impl SetsQuery {
    pub fn new(page: Option<String>, page_size: Option<String>, search: Option<String>) -> Self {
        Self {
            page: page.unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            page_size: page_size.unwrap_or_else(|| DEFAULT_SETS_PAGE_SIZE.to_string()),
            search: non_empty(search),
        }
    }

    /// `/sets` 的查询字符串（不含 `?`）
    ///
    /// `search` 原样拼入 `q=name:"..."`，不编码。
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&pageSize={}", self.page, self.page_size);
        if let Some(search) = &self.search {
            query.push_str(&format!("&q=name:\"{}\"", search));
        }
        query
    }
}

/// 系列 ID
///
/// 不变量: 非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetId(String);

impl SetId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.is_empty() {
            return Err("setId parameter is required");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 按系列列出卡牌的查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardsBySetQuery {
    pub set_id: SetId,
    pub page: String,
    pub page_size: String,
    pub order_by: String,
}

impl CardsBySetQuery {
    pub fn new(
        set_id: SetId,
        page: Option<String>,
        page_size: Option<String>,
        order_by: Option<String>,
    ) -> Self {
        Self {
            set_id,
            page: page.unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            page_size: page_size.unwrap_or_else(|| DEFAULT_CARDS_PAGE_SIZE.to_string()),
            order_by: order_by.unwrap_or_else(|| DEFAULT_CARDS_ORDER_BY.to_string()),
        }
    }

    /// `/cards` 的查询字符串（不含 `?`），setId 不编码
    pub fn to_query_string(&self) -> String {
        format!(
            "q=set.id:{}&page={}&pageSize={}&orderBy={}",
            self.set_id, self.page, self.page_size, self.order_by
        )
    }
}

/// 全文卡牌搜索
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSearch {
    pub q: Option<String>,
    pub name: Option<String>,
    pub set: Option<String>,
    pub rarity: Option<String>,
    pub types: Option<String>,
    pub page: String,
    pub page_size: String,
}

impl CardSearch {
    pub fn new(
        q: Option<String>,
        name: Option<String>,
        set: Option<String>,
        rarity: Option<String>,
        types: Option<String>,
        page: Option<String>,
        page_size: Option<String>,
    ) -> Self {
        Self {
            q: non_empty(q),
            name: non_empty(name),
            set: non_empty(set),
            rarity: non_empty(rarity),
            types: non_empty(types),
            page: page.unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            page_size: page_size.unwrap_or_else(|| DEFAULT_SEARCH_PAGE_SIZE.to_string()),
        }
    }

    /// 搜索子句，固定顺序: q, name, set, rarity, types
    pub fn clauses(&self) -> Vec<String> {
        let mut clauses = Vec::new();

        if let Some(q) = &self.q {
            clauses.push(format!("name:\"*{}*\"", q));
        }
        if let Some(name) = &self.name {
            clauses.push(format!("name:\"{}\"", name));
        }
        if let Some(set) = &self.set {
            clauses.push(format!("set.name:\"{}\"", set));
        }
        if let Some(rarity) = &self.rarity {
            clauses.push(format!("rarity:\"{}\"", rarity));
        }
        if let Some(types) = &self.types {
            clauses.push(format!("types:\"{}\"", types));
        }

        if clauses.is_empty() {
            clauses.push(DEFAULT_SEARCH_CLAUSE.to_string());
        }
        clauses
    }

    /// 未编码的搜索表达式，也会原样返回给调用方
    pub fn expression(&self) -> String {
        self.clauses().join(" AND ")
    }

    /// `/cards` 的查询字符串（不含 `?`），搜索表达式整体编码
    pub fn to_query_string(&self) -> String {
        format!(
            "q={}&page={}&pageSize={}&orderBy={}",
            encode_uri_component(&self.expression()),
            self.page,
            self.page_size,
            SEARCH_ORDER_BY
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_sets_query_defaults() {
        let query = SetsQuery::new(None, None, None);
        assert_eq!(query.to_query_string(), "page=1&pageSize=20");
    }

    #[test]
    fn test_sets_query_injects_search_verbatim() {
        let query = SetsQuery::new(s("2"), s("50"), s("Base Set"));
        assert_eq!(
            query.to_query_string(),
            "page=2&pageSize=50&q=name:\"Base Set\""
        );
    }

    #[test]
    fn test_sets_query_empty_search_is_ignored() {
        let query = SetsQuery::new(None, None, s(""));
        assert_eq!(query.to_query_string(), "page=1&pageSize=20");
    }

    #[test]
    fn test_sets_query_keeps_empty_page_verbatim() {
        let query = SetsQuery::new(s(""), None, None);
        assert_eq!(query.to_query_string(), "page=&pageSize=20");
    }

    #[test]
    fn test_set_id_rejects_empty() {
        assert!(SetId::new("").is_err());
        assert_eq!(SetId::new("base1").unwrap().as_str(), "base1");
    }

    #[test]
    fn test_cards_by_set_defaults() {
        let query = CardsBySetQuery::new(SetId::new("sv3pt5").unwrap(), None, None, None);
        assert_eq!(
            query.to_query_string(),
            "q=set.id:sv3pt5&page=1&pageSize=250&orderBy=number"
        );
    }

    #[test]
    fn test_cards_by_set_does_not_encode_set_id() {
        let query = CardsBySetQuery::new(
            SetId::new("base 1&x").unwrap(),
            s("3"),
            s("10"),
            s("-name"),
        );
        assert_eq!(
            query.to_query_string(),
            "q=set.id:base 1&x&page=3&pageSize=10&orderBy=-name"
        );
    }

    #[test]
    fn test_search_without_terms_uses_default_clause() {
        let search = CardSearch::new(None, s(""), None, s(""), None, None, None);
        assert_eq!(search.expression(), "supertype:pokemon");
        assert_eq!(
            search.to_query_string(),
            "q=supertype%3Apokemon&page=1&pageSize=20&orderBy=set.releaseDate"
        );
    }

    #[test]
    fn test_search_wildcard_clause_preserves_case() {
        let search = CardSearch::new(s("ChAr"), None, None, None, None, None, None);
        assert_eq!(search.clauses(), vec!["name:\"*ChAr*\"".to_string()]);
    }

    #[test]
    fn test_search_clause_order() {
        let search = CardSearch::new(
            s("char"),
            s("Charizard"),
            s("Base"),
            s("Rare Holo"),
            s("Fire"),
            None,
            None,
        );
        assert_eq!(
            search.expression(),
            "name:\"*char*\" AND name:\"Charizard\" AND set.name:\"Base\" AND rarity:\"Rare Holo\" AND types:\"Fire\""
        );
    }

    #[test]
    fn test_search_query_string_is_uri_encoded() {
        let search = CardSearch::new(s("char"), None, None, s("Rare"), None, s("2"), s("5"));
        assert_eq!(
            search.to_query_string(),
            "q=name%3A%22*char*%22%20AND%20rarity%3A%22Rare%22&page=2&pageSize=5&orderBy=set.releaseDate"
        );
    }

    #[test]
    fn test_encode_uri_component_reserved_marks() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_uri_component("é &/"), "%C3%A9%20%26%2F");
    }
}

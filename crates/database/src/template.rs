//! 命名参数SQL
//!
//! sqlx 只支持位置参数，这里提供一层很薄的命名参数支持：
//!
//! ```text
//! insert into item (item_name, price, quantity) values (:itemName, :price, :quantity)
//!                             │
//!                     NamedSql::parse
//!                             ▼
//! insert into item (item_name, price, quantity) values (?1, ?2, ?3)
//!                  names = [itemName, price, quantity]
//! ```
//!
//! 参数值通过 [`NamedParams`] 提供，可以手动 `add_value`，也可以直接从 [`Item`] /
//! [`ItemUpdate`] / [`ItemSearchCondition`] 转换（按字段名自动生成参数）。

use crate::models::item::{Item, ItemSearchCondition, ItemUpdate};
use crate::query::SqlValue;
use crate::{DatabaseError, DatabaseResult};
use std::collections::HashMap;

/// 命名参数集合
#[derive(Debug, Clone, Default)]
pub struct NamedParams {
    values: HashMap<String, SqlValue>,
}

impl NamedParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加（或覆盖）一个参数
    pub fn add_value(mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.values.get(name)
    }
}

impl From<&Item> for NamedParams {
    fn from(item: &Item) -> Self {
        NamedParams::new()
            .add_value("id", item.id)
            .add_value("itemName", item.item_name.as_str())
            .add_value("price", item.price)
            .add_value("quantity", item.quantity)
    }
}

impl From<&ItemUpdate> for NamedParams {
    fn from(update: &ItemUpdate) -> Self {
        NamedParams::new()
            .add_value("itemName", update.item_name.as_str())
            .add_value("price", update.price)
            .add_value("quantity", update.quantity)
    }
}

impl From<&ItemSearchCondition> for NamedParams {
    fn from(condition: &ItemSearchCondition) -> Self {
        NamedParams::new()
            .add_value("itemName", condition.item_name.as_deref())
            .add_value("maxPrice", condition.max_price)
    }
}

/// 解析后的命名参数SQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSql {
    sql: String,
    /// `names[i]` 对应占位符 `?{i + 1}`
    names: Vec<String>,
}

impl NamedSql {
    /// 将 `:name` 形式的占位符改写为 `?N`
    ///
    /// - 同名参数复用同一个序号
    /// - 单引号字符串、双引号标识符中的内容原样保留
    /// - `::` 类型转换原样保留
    pub fn parse(sql: &str) -> Self {
        let mut out = String::with_capacity(sql.len());
        let mut names: Vec<String> = Vec::new();
        let mut chars = sql.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' | '"' => {
                    out.push(c);
                    for inner in chars.by_ref() {
                        out.push(inner);
                        if inner == c {
                            break;
                        }
                    }
                }
                ':' if chars.peek() == Some(&':') => {
                    out.push_str("::");
                    chars.next();
                }
                ':' if chars.peek().is_some_and(|n| n.is_ascii_alphabetic() || *n == '_') => {
                    let mut name = String::new();
                    while let Some(&n) = chars.peek() {
                        if n.is_ascii_alphanumeric() || n == '_' {
                            name.push(n);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    let index = match names.iter().position(|existing| *existing == name) {
                        Some(pos) => pos + 1,
                        None => {
                            names.push(name);
                            names.len()
                        }
                    };
                    out.push('?');
                    out.push_str(&index.to_string());
                }
                _ => out.push(c),
            }
        }

        Self { sql: out, names }
    }

    /// 改写后的SQL
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// SQL中出现的参数名，按序号排列
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 按序号顺序取出参数值
    pub fn bind(&self, params: &NamedParams) -> DatabaseResult<Vec<SqlValue>> {
        self.names
            .iter()
            .map(|name| {
                params
                    .get(name)
                    .cloned()
                    .ok_or_else(|| DatabaseError::MissingParameter(name.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert() {
        let named = NamedSql::parse(
            "insert into item (item_name, price, quantity) values (:itemName, :price, :quantity)",
        );
        assert_eq!(
            named.sql(),
            "insert into item (item_name, price, quantity) values (?1, ?2, ?3)"
        );
        assert_eq!(named.names(), ["itemName", "price", "quantity"]);
    }

    #[test]
    fn test_repeated_name_reuses_index() {
        let named = NamedSql::parse("select * from item where id = :id or (:id is null and price > :price)");
        assert_eq!(named.sql(), "select * from item where id = ?1 or (?1 is null and price > ?2)");
        assert_eq!(named.names(), ["id", "price"]);
    }

    #[test]
    fn test_literals_and_casts_untouched() {
        let named = NamedSql::parse("select ':skip', \"a:b\", price::text from item where id = :id");
        assert_eq!(
            named.sql(),
            "select ':skip', \"a:b\", price::text from item where id = ?1"
        );
        assert_eq!(named.names(), ["id"]);
    }

    #[test]
    fn test_lone_colon_untouched() {
        let named = NamedSql::parse("select 1 : 2");
        assert_eq!(named.sql(), "select 1 : 2");
        assert!(named.names().is_empty());
    }

    #[test]
    fn test_bind_in_index_order() {
        let named = NamedSql::parse("update item set item_name=:itemName, price=:price where id=:id");
        let params = NamedParams::new()
            .add_value("id", 3_i64)
            .add_value("price", 500)
            .add_value("itemName", "itemA");

        let values = named.bind(&params).unwrap();
        assert_eq!(
            values,
            vec![
                SqlValue::Text("itemA".to_string()),
                SqlValue::Int(500),
                SqlValue::Int(3)
            ]
        );
    }

    #[test]
    fn test_bind_missing_parameter() {
        let named = NamedSql::parse("select * from item where id = :id");
        let err = named.bind(&NamedParams::new()).unwrap_err();
        assert!(matches!(err, DatabaseError::MissingParameter(name) if name == "id"));
    }

    #[test]
    fn test_params_from_search_condition() {
        let params = NamedParams::from(&ItemSearchCondition::new(None, Some(100)));
        assert_eq!(params.get("itemName"), Some(&SqlValue::Null));
        assert_eq!(params.get("maxPrice"), Some(&SqlValue::Int(100)));
    }
}

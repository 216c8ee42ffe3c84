//! 动态查询条件
//!
//! 商品搜索时，根据 [`ItemSearchCondition`] 中实际存在的条件拼接 `where` / `and` 子句：
//!
//! | 名称 | 最高价格 | 生成的子句 |
//! |------|----------|-----------|
//! | 无   | 无       | （不生成 `where`） |
//! | 有   | 无       | ` where item_name like ...` |
//! | 无   | 有       | ` where price <= ...` |
//! | 有   | 有       | ` where item_name like ... and price <= ...` |
//!
//! 占位符的写法由调用方决定（位置参数 `?N` 或命名参数 `:name`），
//! 这样原生SQL和命名参数SQL两种仓库可以共享同一套条件构造逻辑。

use crate::models::item::ItemSearchCondition;
use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

/// 商品表查询列
pub const SELECT_ITEM: &str = "select id, item_name, price, quantity from item";

/// 商品列表排序
pub const ORDER_BY_ID: &str = " order by id";

/// SQL参数值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
    Null,
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// 搜索条件中的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFilterParam {
    /// 商品名称（模糊搜索）
    ItemName,
    /// 最高价格
    MaxPrice,
}

impl ItemFilterParam {
    /// 命名参数SQL中使用的参数名
    pub fn name(self) -> &'static str {
        match self {
            ItemFilterParam::ItemName => "itemName",
            ItemFilterParam::MaxPrice => "maxPrice",
        }
    }
}

/// `where` 子句构造器
///
/// 按添加顺序用 `and` 连接所有条件；没有任何条件时不生成 `where`。
#[derive(Debug, Clone, Default)]
pub struct WhereClause {
    predicates: Vec<String>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个条件
    pub fn and(&mut self, predicate: impl Into<String>) -> &mut Self {
        self.predicates.push(predicate.into());
        self
    }

    /// 生成子句文本，以空格开头，方便直接拼接到 `select` 语句之后
    pub fn render(&self) -> String {
        if self.predicates.is_empty() {
            return String::new();
        }
        format!(" where {}", self.predicates.join(" and "))
    }
}

/// 根据搜索条件构造商品的 `where` 子句
///
/// `placeholder` 负责为每个实际使用到的参数生成占位符，调用顺序与参数在SQL中出现的顺序一致。
pub fn item_search_clause<F>(condition: &ItemSearchCondition, mut placeholder: F) -> WhereClause
where
    F: FnMut(ItemFilterParam) -> String,
{
    let mut clause = WhereClause::new();
    if condition.is_empty() {
        return clause;
    }

    if condition.name_filter().is_some() {
        let p = placeholder(ItemFilterParam::ItemName);
        clause.and(format!("item_name like '%' || {p} || '%'"));
    }

    if condition.max_price.is_some() {
        let p = placeholder(ItemFilterParam::MaxPrice);
        clause.and(format!("price <= {p}"));
    }

    clause
}

/// 为 sqlx 查询按顺序绑定 [`SqlValue`]
pub trait BindValues: Sized {
    fn bind_value(self, value: &SqlValue) -> Self;

    fn bind_values(self, values: &[SqlValue]) -> Self {
        values.iter().fold(self, |query, value| query.bind_value(value))
    }
}

macro_rules! impl_bind_values {
    ($([$($generics:tt)*] $query:ty),* $(,)?) => {
        $(
            impl<$($generics)*> BindValues for $query {
                fn bind_value(self, value: &SqlValue) -> Self {
                    match value {
                        SqlValue::Text(s) => self.bind(s.clone()),
                        SqlValue::Int(i) => self.bind(*i),
                        SqlValue::Null => self.bind(Option::<String>::None),
                    }
                }
            }
        )*
    };
}

impl_bind_values!(
    ['q] Query<'q, Sqlite, SqliteArguments<'q>>,
    ['q, O] QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ['q, O] QueryScalar<'q, Sqlite, O, SqliteArguments<'q>>,
);

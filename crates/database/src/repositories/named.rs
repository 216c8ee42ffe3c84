//! 命名参数商品仓库
//!
//! SQL中使用 `:name` 形式的命名参数，参数值可以直接从商品、更新参数、搜索条件中按字段生成，
//! 不需要关心参数顺序。具体改写规则参考 [`NamedSql`]。

use crate::models::item::{Item, ItemSearchCondition, ItemUpdate};
use crate::query::{item_search_clause, BindValues, ORDER_BY_ID, SELECT_ITEM};
use crate::repositories::traits::ItemRepositoryTrait;
use crate::template::{NamedParams, NamedSql};
use crate::{DatabaseError, DatabaseResult};
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

const INSERT_ITEM: &str = r#"
insert into item (item_name, price, quantity)
values (:itemName, :price, :quantity)
returning id
"#;

const UPDATE_ITEM: &str = r#"
update item
set item_name = :itemName,
    price = :price,
    quantity = :quantity
where id = :id
"#;

const SELECT_ITEM_BY_ID: &str = r#"
select id, item_name, price, quantity
from item
where id = :id
"#;

/// 命名参数商品仓库结构体
#[derive(Debug, Clone)]
pub struct NamedParamItemRepository {
    pool: SqlitePool,
}

impl NamedParamItemRepository {
    /// 创建新的商品仓库实例
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ItemRepositoryTrait for NamedParamItemRepository {
    /// 保存新商品
    ///
    /// 参数直接由 [`Item`] 的字段生成
    async fn save(&self, mut item: Item) -> DatabaseResult<Item> {
        if let Some(id) = item.id {
            return Err(DatabaseError::AlreadyPersisted(id));
        }

        debug!("📝 保存商品: {:?}", item);

        let named = NamedSql::parse(INSERT_ITEM);
        let values = named.bind(&NamedParams::from(&item))?;

        let id: i64 = sqlx::query_scalar::<Sqlite, i64>(named.sql())
            .bind_values(&values)
            .fetch_one(&self.pool)
            .await?;

        item.id = Some(id);

        debug!("✅ 商品保存成功: {:?}", item);
        Ok(item)
    }

    /// 更新商品
    ///
    /// 更新参数里没有 `id`，需要额外补充
    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<()> {
        debug!("🔄 更新商品 {} 信息: {:?}", item_id, update);

        let named = NamedSql::parse(UPDATE_ITEM);
        let params = NamedParams::from(&update).add_value("id", item_id);
        let values = named.bind(&params)?;

        let result = sqlx::query::<Sqlite>(named.sql())
            .bind_values(&values)
            .execute(&self.pool)
            .await?;

        debug!("✅ 商品更新完成，影响行数: {}", result.rows_affected());
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>> {
        debug!("🔍 根据 ID 获取商品: {}", id);

        let named = NamedSql::parse(SELECT_ITEM_BY_ID);
        let values = named.bind(&NamedParams::new().add_value("id", id))?;

        let item = sqlx::query_as::<Sqlite, Item>(named.sql())
            .bind_values(&values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>> {
        let clause = item_search_clause(&condition, |param| format!(":{}", param.name()));
        let sql = format!("{SELECT_ITEM}{}{ORDER_BY_ID}", clause.render());
        debug!("🔍 sql={}", sql);

        let named = NamedSql::parse(&sql);
        let values = named.bind(&NamedParams::from(&condition))?;

        let items = sqlx::query_as::<Sqlite, Item>(named.sql())
            .bind_values(&values)
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 搜索完成 - 找到 {} 个商品", items.len());
        Ok(items)
    }
}

//! 位置参数商品仓库
//!
//! 直接编写SQL，参数使用位置占位符 `?N` 按顺序绑定

use crate::models::item::{Item, ItemSearchCondition, ItemUpdate};
use crate::query::{item_search_clause, BindValues, ItemFilterParam, SqlValue, ORDER_BY_ID, SELECT_ITEM};
use crate::repositories::traits::ItemRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

/// 位置参数商品仓库结构体
#[derive(Debug, Clone)]
pub struct PositionalItemRepository {
    pool: SqlitePool,
}

impl PositionalItemRepository {
    /// 创建新的商品仓库实例
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ItemRepositoryTrait for PositionalItemRepository {
    /// 保存新商品
    ///
    /// 使用 `returning id` 获取数据库自增生成的ID，再回填到商品上
    async fn save(&self, mut item: Item) -> DatabaseResult<Item> {
        if let Some(id) = item.id {
            return Err(DatabaseError::AlreadyPersisted(id));
        }

        debug!("📝 保存商品: {:?}", item);

        let id: i64 = sqlx::query_scalar(
            "insert into item (item_name, price, quantity) values (?1, ?2, ?3) returning id",
        )
        .bind(item.item_name.as_str())
        .bind(item.price)
        .bind(item.quantity)
        .fetch_one(&self.pool)
        .await?;

        item.id = Some(id);

        debug!("✅ 商品保存成功: {:?}", item);
        Ok(item)
    }

    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<()> {
        debug!("🔄 更新商品 {} 信息: {:?}", item_id, update);

        let result = sqlx::query("update item set item_name=?1, price=?2, quantity=?3 where id=?4")
            .bind(update.item_name.as_str())
            .bind(update.price)
            .bind(update.quantity)
            .bind(item_id)
            .execute(&self.pool)
            .await?;

        debug!("✅ 商品更新完成，影响行数: {}", result.rows_affected());
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>> {
        debug!("🔍 根据 ID 获取商品: {}", id);

        let item = sqlx::query_as::<Sqlite, Item>(
            "select id, item_name, price, quantity from item where id=?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// 根据搜索条件查询商品
    ///
    /// 动态拼接 `where` 子句，参数值按照占位符出现的顺序收集后依次绑定
    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>> {
        let mut values: Vec<SqlValue> = Vec::new();
        let clause = item_search_clause(&condition, |param| {
            values.push(match param {
                ItemFilterParam::ItemName => condition.name_filter().into(),
                ItemFilterParam::MaxPrice => condition.max_price.into(),
            });
            format!("?{}", values.len())
        });

        let sql = format!("{SELECT_ITEM}{}{ORDER_BY_ID}", clause.render());
        debug!("🔍 sql={}, params={:?}", sql, values);

        let items = sqlx::query_as::<Sqlite, Item>(&sql)
            .bind_values(&values)
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 搜索完成 - 找到 {} 个商品", items.len());
        Ok(items)
    }
}

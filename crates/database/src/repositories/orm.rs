//! ORM商品仓库
//!
//! 基于 sea-orm 实体 [`crate::entities::item`] 完成持久化，SQL由ORM生成。
//! 与其他仓库共享同一个sqlx连接池。

use crate::entities::item::{ActiveModel, Column, Entity as ItemEntity};
use crate::models::item::{Item, ItemSearchCondition, ItemUpdate};
use crate::repositories::traits::ItemRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, SqlxSqliteConnector,
};
use sqlx::SqlitePool;
use tracing::debug;

/// ORM商品仓库结构体
#[derive(Debug, Clone)]
pub struct OrmItemRepository {
    db: DatabaseConnection,
}

impl OrmItemRepository {
    /// 使用已有的连接池创建仓库
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            db: SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        }
    }
}

#[async_trait::async_trait]
impl ItemRepositoryTrait for OrmItemRepository {
    async fn save(&self, item: Item) -> DatabaseResult<Item> {
        if let Some(id) = item.id {
            return Err(DatabaseError::AlreadyPersisted(id));
        }

        debug!("📝 保存商品: {:?}", item);

        let model = ActiveModel {
            id: NotSet,
            item_name: Set(item.item_name),
            price: Set(item.price),
            quantity: Set(item.quantity),
        }
        .insert(&self.db)
        .await?;

        debug!("✅ 商品保存成功: {:?}", model);
        Ok(model.into())
    }

    /// 更新商品
    ///
    /// 直接按ID生成一条 `update` 语句，商品不存在时影响行数为0
    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<()> {
        debug!("🔄 更新商品 {} 信息: {:?}", item_id, update);

        let result = ItemEntity::update_many()
            .col_expr(Column::ItemName, Expr::value(update.item_name))
            .col_expr(Column::Price, Expr::value(update.price))
            .col_expr(Column::Quantity, Expr::value(update.quantity))
            .filter(Column::Id.eq(item_id))
            .exec(&self.db)
            .await?;

        debug!("✅ 商品更新完成，影响行数: {}", result.rows_affected);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>> {
        debug!("🔍 根据 ID 获取商品: {}", id);

        let model = ItemEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Item::from))
    }

    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>> {
        debug!("🔍 搜索商品: {:?}", condition);

        // Condition::all() 没有子条件时不会生成 where
        let mut filter = Condition::all();
        if let Some(name) = condition.name_filter() {
            filter = filter.add(Column::ItemName.contains(name));
        }
        if let Some(max_price) = condition.max_price {
            filter = filter.add(Column::Price.lte(max_price));
        }

        let models = ItemEntity::find()
            .filter(filter)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        debug!("✅ 搜索完成 - 找到 {} 个商品", models.len());
        Ok(models.into_iter().map(Item::from).collect())
    }
}

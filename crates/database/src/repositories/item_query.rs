//! 商品查询仓库
//!
//! 只负责条件搜索，使用 sea-orm 的查询构造器按条件逐个追加过滤

use crate::entities::item::{Column, Entity as ItemEntity};
use crate::models::item::{Item, ItemSearchCondition};
use crate::repositories::traits::ItemQueryRepositoryTrait;
use crate::DatabaseResult;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QueryTrait,
    SqlxSqliteConnector,
};
use sqlx::SqlitePool;
use tracing::debug;

/// 商品查询仓库结构体
#[derive(Debug, Clone)]
pub struct ItemQueryRepository {
    db: DatabaseConnection,
}

impl ItemQueryRepository {
    /// 使用已有的连接池创建查询仓库
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            db: SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        }
    }
}

#[async_trait::async_trait]
impl ItemQueryRepositoryTrait for ItemQueryRepository {
    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>> {
        debug!("🔍 查询仓库搜索商品: {:?}", condition);

        let models = ItemEntity::find()
            .apply_if(condition.name_filter(), |query, name| {
                query.filter(Column::ItemName.contains(name))
            })
            .apply_if(condition.max_price, |query, max_price| {
                query.filter(Column::Price.lte(max_price))
            })
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        debug!("✅ 搜索完成 - 找到 {} 个商品", models.len());
        Ok(models.into_iter().map(Item::from).collect())
    }
}

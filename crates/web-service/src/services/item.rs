//! 商品服务
//!
//! 提供商品相关的业务逻辑操作

use crate::services::traits::ItemServiceTrait;
use database::{DatabaseError, DatabaseResult, Item, ItemRepositoryTrait, ItemSearchCondition, ItemUpdate};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ItemService<IR: ItemRepositoryTrait> {
    item_repository: IR,
}

impl<IR: ItemRepositoryTrait> ItemService<IR> {
    pub fn new(item_repository: IR) -> Self {
        Self { item_repository }
    }
}

#[async_trait::async_trait]
impl<IR: ItemRepositoryTrait> ItemServiceTrait for ItemService<IR> {
    async fn save(&self, item: Item) -> DatabaseResult<Item> {
        self.item_repository.save(item).await
    }

    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<Item> {
        load_and_update(&self.item_repository, item_id, update).await
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>> {
        self.item_repository.find_by_id(id).await
    }

    async fn find_items(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>> {
        self.item_repository.find_all(condition).await
    }
}

/// 先加载商品，只修改名称、价格、数量后再持久化
///
/// 加载和写入是两条独立的语句，不在同一个事务中：商品不会被删除，所以存在性检查始终有效；
/// 同一商品的并发更新以最后一次写入为准，返回值是本次请求写入的内容。
pub(crate) async fn load_and_update<IR: ItemRepositoryTrait>(
    item_repository: &IR,
    item_id: i64,
    update: ItemUpdate,
) -> DatabaseResult<Item> {
    let mut item = item_repository
        .find_by_id(item_id)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("item id={item_id}")))?;

    item.apply(&update);
    item_repository.update(item_id, update).await?;

    debug!("✅ 商品 {} 更新为 {:?}", item_id, item);
    Ok(item)
}

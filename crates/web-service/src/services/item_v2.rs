//! 命令 / 查询分离的商品服务
//!
//! 保存、更新、按ID查询使用命令仓库，条件搜索使用单独的查询仓库

use crate::services::item::load_and_update;
use crate::services::traits::ItemServiceTrait;
use database::{
    DatabaseResult, Item, ItemQueryRepositoryTrait, ItemRepositoryTrait, ItemSearchCondition,
    ItemUpdate,
};

#[derive(Debug, Clone)]
pub struct ItemServiceV2<IR: ItemRepositoryTrait, QR: ItemQueryRepositoryTrait> {
    item_repository: IR,
    item_query_repository: QR,
}

impl<IR: ItemRepositoryTrait, QR: ItemQueryRepositoryTrait> ItemServiceV2<IR, QR> {
    pub fn new(item_repository: IR, item_query_repository: QR) -> Self {
        Self {
            item_repository,
            item_query_repository,
        }
    }
}

#[async_trait::async_trait]
impl<IR, QR> ItemServiceTrait for ItemServiceV2<IR, QR>
where
    IR: ItemRepositoryTrait,
    QR: ItemQueryRepositoryTrait,
{
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
        self.item_query_repository.find_all(condition).await
    }
}

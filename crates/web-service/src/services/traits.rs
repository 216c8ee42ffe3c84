//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use database::{DatabaseResult, Item, ItemSearchCondition, ItemUpdate};

/// 商品服务 trait 定义
///
/// 定义了商品相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`ItemService`](crate::services::ItemService) 提供。
/// Web层通过 `Arc<dyn ItemServiceTrait>` 持有服务，因此这里不要求 `Clone`。
#[async_trait::async_trait]
pub trait ItemServiceTrait: Send + Sync + 'static {
    /// 保存新商品
    ///
    /// # 返回值
    /// 返回带有数据库分配ID的商品
    async fn save(&self, item: Item) -> DatabaseResult<Item>;

    /// 更新商品信息
    ///
    /// # 参数
    /// - `item_id`: 商品 ID
    /// - `update`: 更新信息（名称、价格、数量）
    ///
    /// # 返回值
    /// 返回更新后的商品，商品不存在时返回 [`DatabaseError::NotFound`](database::DatabaseError::NotFound)
    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<Item>;

    /// 根据 ID 获取商品
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>>;

    /// 根据搜索条件查询商品
    async fn find_items(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>>;
}

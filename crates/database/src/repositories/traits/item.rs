//! 商品仓库 trait 定义
//!
//! 定义商品数据库操作的抽象接口

use crate::models::item::{Item, ItemSearchCondition, ItemUpdate};
use crate::DatabaseResult;

/// 商品仓库trait定义
///
/// 定义了商品相关的数据库操作接口，支持：
/// - 商品保存
/// - 商品更新
/// - 根据ID查询
/// - 按条件搜索
#[async_trait::async_trait]
pub trait ItemRepositoryTrait: Send + Sync + Clone + 'static {
    /// 保存新商品
    ///
    /// # 参数
    /// - `item`: 尚未持久化的商品（`id` 必须为 `None`）
    ///
    /// # 返回值
    /// 返回带有数据库分配ID的商品。
    /// 如果传入的商品已经带有ID，返回 [`DatabaseError::AlreadyPersisted`](crate::DatabaseError::AlreadyPersisted)
    async fn save(&self, item: Item) -> DatabaseResult<Item>;

    /// 更新商品的名称、价格、数量
    ///
    /// 指定ID的商品不存在时不做任何修改
    ///
    /// # 参数
    /// - `item_id`: 商品 ID
    /// - `update`: 更新信息
    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<()>;

    /// 根据 ID 获取商品
    ///
    /// # 返回值
    /// 查询不到时返回 `None`，而不是错误
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>>;

    /// 根据搜索条件查询商品列表
    ///
    /// # 参数
    /// - `condition`: 搜索条件，名称模糊匹配、价格不超过最高价格，两个条件都是可选的
    ///
    /// # 返回值
    /// 按ID升序排列的商品列表
    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>>;
}

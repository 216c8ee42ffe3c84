//! 商品查询仓库 trait 定义
//!
//! 与 [`ItemRepositoryTrait`](super::ItemRepositoryTrait) 分离的只读接口，
//! 写操作和按ID查询走命令仓库，条件搜索走查询仓库。

use crate::models::item::{Item, ItemSearchCondition};
use crate::DatabaseResult;

/// 商品查询仓库trait定义
#[async_trait::async_trait]
pub trait ItemQueryRepositoryTrait: Send + Sync + Clone + 'static {
    /// 根据搜索条件查询商品列表
    ///
    /// 过滤规则与 [`ItemRepositoryTrait::find_all`](super::ItemRepositoryTrait::find_all) 完全一致，
    /// 结果按ID升序排列
    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>>;
}

//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层，同一个 [`ItemRepositoryTrait`] 有多种可互换的实现

pub mod item_query;
pub mod memory;
pub mod named;
pub mod orm;
pub mod positional;
pub mod traits;

// 重新导出具体的类型
pub use item_query::ItemQueryRepository;
pub use memory::MemoryItemRepository;
pub use named::NamedParamItemRepository;
pub use orm::OrmItemRepository;
pub use positional::PositionalItemRepository;
pub use traits::{ItemQueryRepositoryTrait, ItemRepositoryTrait};

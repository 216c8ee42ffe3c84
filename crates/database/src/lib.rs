//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、商品仓库等功能。
//!
//! 商品仓库有多种可互换的实现，统一实现 [`ItemRepositoryTrait`]：
//! - [`PositionalItemRepository`]：原生SQL + 位置参数
//! - [`NamedParamItemRepository`]：原生SQL + 命名参数
//! - [`OrmItemRepository`]：基于 sea-orm 实体
//! - [`MemoryItemRepository`]：进程内存储
//!
//! 条件搜索还可以单独交给 [`ItemQueryRepositoryTrait`] 的实现 [`ItemQueryRepository`]。

pub mod connection;
pub mod entities;
pub mod error;
pub mod models;
pub mod query;
pub mod repositories;
pub mod template;

pub use connection::{connect_in_memory, initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::item::{Item, ItemSearchCondition, ItemUpdate};
pub use repositories::{
    item_query::ItemQueryRepository, memory::MemoryItemRepository, named::NamedParamItemRepository,
    orm::OrmItemRepository, positional::PositionalItemRepository,
    traits::{ItemQueryRepositoryTrait, ItemRepositoryTrait},
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;

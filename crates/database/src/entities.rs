//! sea-orm 实体定义
//!
//! ORM仓库使用的实体，与 `migrations` 中的表结构保持一致

pub mod item;

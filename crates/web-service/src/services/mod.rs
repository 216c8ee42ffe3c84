//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，遵循六边形架构原则

pub mod item;
pub mod item_v2;
pub mod seed;
pub mod traits;

pub use item::ItemService;
pub use item_v2::ItemServiceV2;
pub use seed::seed_test_data;
pub use traits::ItemServiceTrait;

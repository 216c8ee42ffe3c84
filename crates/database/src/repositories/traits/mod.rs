//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + Clone + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：仓库实例会在多个请求（多个线程）之间共享
//! - `Clone`：服务层持有仓库的副本，所有实现内部都只是连接池或 `Arc`，克隆成本很低
//! - `'static`：作为应用服务长期运行，不依赖于短期引用
//!
//! ## 可互换的实现 🔄
//!
//! 服务层只依赖 trait，启动时根据配置选择具体实现：
//!
//! ```rust,ignore
//! let service = match config.repository {
//!     RepositoryKind::PositionalSql => ItemService::new(PositionalItemRepository::new(pool)),
//!     RepositoryKind::NamedSql => ItemService::new(NamedParamItemRepository::new(pool)),
//!     // ...
//! };
//! ```
//!
//! 服务层使用泛型而非 trait object，零成本抽象，编译时优化。
//!
//! ## 命令 / 查询分离 ✂️
//!
//! [`ItemQueryRepositoryTrait`] 只包含条件搜索，可以和任意 [`ItemRepositoryTrait`] 组合使用：
//! 保存、更新、按ID查询走命令仓库，搜索走查询仓库。

pub mod item;
pub mod item_query;

// 重新导出
pub use item::ItemRepositoryTrait;
pub use item_query::ItemQueryRepositoryTrait;

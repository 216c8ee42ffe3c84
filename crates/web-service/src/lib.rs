//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{
    DatabasePool, ItemQueryRepository, MemoryItemRepository, NamedParamItemRepository,
    OrmItemRepository, PositionalItemRepository,
};
use services::{ItemService, ItemServiceTrait, ItemServiceV2};
use shared_lib::{AppConfig, RepositoryKind};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// 商品服务，具体使用哪个仓库实现由启动配置决定
    pub item_service: Arc<dyn ItemServiceTrait>,

    /// 当前使用的仓库实现
    pub repository: RepositoryKind,
}

/// 根据配置选择仓库实现，组装应用共享状态
///
/// 所有SQL仓库共享同一个连接池；内存仓库不使用连接池。
pub fn build_app_state(pool: DatabasePool, repository: RepositoryKind) -> AppState {
    let item_service: Arc<dyn ItemServiceTrait> = match repository {
        RepositoryKind::Memory => Arc::new(ItemService::new(MemoryItemRepository::new())),
        RepositoryKind::PositionalSql => Arc::new(ItemService::new(PositionalItemRepository::new(pool))),
        RepositoryKind::NamedSql => Arc::new(ItemService::new(NamedParamItemRepository::new(pool))),
        RepositoryKind::Orm => Arc::new(ItemService::new(OrmItemRepository::new(pool))),
        RepositoryKind::CommandQuery => Arc::new(ItemServiceV2::new(
            OrmItemRepository::new(pool.clone()),
            ItemQueryRepository::new(pool),
        )),
    };

    AppState {
        item_service,
        repository,
    }
}

/// 启动 Web 服务
pub async fn start_web_service(pool: DatabasePool, config: Arc<AppConfig>, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = build_app_state(pool, config.repository);
    info!("📦 商品仓库实现: {}", config.repository);

    if config.seed_test_data {
        services::seed_test_data(shared_state.item_service.as_ref()).await?;
    }

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{connect_in_memory, Item, ItemSearchCondition};

    #[tokio::test]
    async fn test_every_repository_kind_is_wired() {
        for kind in [
            RepositoryKind::Memory,
            RepositoryKind::PositionalSql,
            RepositoryKind::NamedSql,
            RepositoryKind::Orm,
            RepositoryKind::CommandQuery,
        ] {
            let pool = connect_in_memory().await.unwrap();
            let state = build_app_state(pool, kind);
            assert_eq!(state.repository, kind);

            let saved = state.item_service.save(Item::new("itemA", 10000, 10)).await.unwrap();
            let found = state.item_service.find_by_id(saved.id.unwrap()).await.unwrap();
            assert_eq!(found, Some(saved.clone()), "repository kind {kind}");

            let items = state.item_service.find_items(ItemSearchCondition::default()).await.unwrap();
            assert_eq!(items, vec![saved], "repository kind {kind}");
        }
    }

    #[tokio::test]
    async fn test_command_query_searches_shared_pool() {
        let pool = connect_in_memory().await.unwrap();
        let state = build_app_state(pool, RepositoryKind::CommandQuery);

        let cheap = state.item_service.save(Item::new("itemA", 10000, 10)).await.unwrap();
        state.item_service.save(Item::new("itemB", 20000, 20)).await.unwrap();

        let found = state
            .item_service
            .find_items(ItemSearchCondition::new(Some("item".to_string()), Some(15000)))
            .await
            .unwrap();
        assert_eq!(found, vec![cheap]);
    }

    #[tokio::test]
    async fn test_seed_test_data() {
        let pool = connect_in_memory().await.unwrap();
        let state = build_app_state(pool, RepositoryKind::PositionalSql);

        services::seed_test_data(state.item_service.as_ref()).await.unwrap();

        let items = state.item_service.find_items(ItemSearchCondition::default()).await.unwrap();
        let names: Vec<&str> = items.iter().map(|item| item.item_name.as_str()).collect();
        assert_eq!(names, ["itemA", "itemB"]);
    }
}

use crate::{DatabaseError, DatabaseResult};
use shared_lib::AppConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// 数据库连接池
pub type DatabasePool = Pool<Sqlite>;

/// 创建数据库连接池并执行迁移（一站式函数）
pub async fn initialize_database(config: &AppConfig) -> DatabaseResult<DatabasePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| DatabaseError::connection(format!("解析数据库地址失败: {e}")))?
        .create_if_missing(true)
        .foreign_keys(true);

    // 内存数据库每个连接都是独立的库，只能保留一个常驻连接
    let pool_options = if is_in_memory(&config.database_url) {
        in_memory_pool_options()
    } else {
        SqlitePoolOptions::new()
            // 启动预留，加快获取速度
            .min_connections(1)
            .max_connections(8)
            .acquire_timeout(Duration::from_secs(3))
            // 1小时空闲则释放
            .idle_timeout(Duration::from_secs(3600))
            // 6小时强制释放，避免长时间链接导致数据库问题
            .max_lifetime(Duration::from_secs(3600 * 6))
            .test_before_acquire(true)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::connection(format!("连接SQLite数据库失败: {e}")))?;

    info!("🗄️ 数据库连接池创建成功");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// 创建内存数据库并执行迁移，主要给测试使用
pub async fn connect_in_memory() -> DatabaseResult<DatabasePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| DatabaseError::connection(format!("解析数据库地址失败: {e}")))?;

    let pool = in_memory_pool_options()
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::connection(format!("连接内存数据库失败: {e}")))?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// 执行数据库迁移
async fn run_migrations(pool: &DatabasePool) -> DatabaseResult<()> {
    info!("🔄 开始执行数据库迁移...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::migration(format!("数据库迁移失败: {e}")))?;

    info!("✅ 数据库迁移完成");
    Ok(())
}

fn in_memory_pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:items?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://item-service.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_connect_in_memory_runs_migrations() {
        let pool = connect_in_memory().await.unwrap();

        let count: i64 = sqlx::query_scalar("select count(*) from item")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

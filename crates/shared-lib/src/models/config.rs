use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 配置错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// 不支持的仓库实现
    #[error("未知的仓库实现: {0}，可选值: memory, positional-sql, named-sql, orm, command-query")]
    UnknownRepository(String),
}

/// 商品仓库的实现方式
///
/// 启动时根据 `ITEM_REPOSITORY` 环境变量选择，服务层对具体实现无感知
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryKind {
    /// 进程内存储
    Memory,
    /// 原生SQL + 位置参数
    PositionalSql,
    /// 原生SQL + 命名参数
    NamedSql,
    /// sea-orm 实体
    #[default]
    Orm,
    /// 命令 / 查询分离：sea-orm 实体负责写入和按ID查询，独立的查询仓库负责搜索
    CommandQuery,
}

impl RepositoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryKind::Memory => "memory",
            RepositoryKind::PositionalSql => "positional-sql",
            RepositoryKind::NamedSql => "named-sql",
            RepositoryKind::Orm => "orm",
            RepositoryKind::CommandQuery => "command-query",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(RepositoryKind::Memory),
            "positional-sql" => Ok(RepositoryKind::PositionalSql),
            "named-sql" => Ok(RepositoryKind::NamedSql),
            "orm" => Ok(RepositoryKind::Orm),
            "command-query" => Ok(RepositoryKind::CommandQuery),
            _ => Err(ConfigError::UnknownRepository(s.to_string())),
        }
    }
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据库链接字符串（SQLite）
    ///
    /// 例如 `sqlite://item-service.db`、`sqlite::memory:`
    pub database_url: String,

    /// 商品仓库实现，可通过环境变量 `ITEM_REPOSITORY` 来调整，默认 `orm`
    pub repository: RepositoryKind,

    /// Web服务监听地址，可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: String,

    /// 启动时是否写入测试数据，可通过环境变量 `SEED_TEST_DATA` 来调整
    pub seed_test_data: bool,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(e) = dotenvy::dotenv() {
            debug!("未加载.env文件: {e}");
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 通过查找函数构造配置，`load` 使用环境变量作为查找来源
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| color_eyre::eyre::eyre!("Can not load DATABASE_URL in environment"))
            .suggestion("设置 DATABASE_URL 环境变量，例如 sqlite://item-service.db")?;

        let repository = match lookup("ITEM_REPOSITORY") {
            Some(value) => value
                .parse::<RepositoryKind>()
                .context("Can not parse ITEM_REPOSITORY")
                .suggestion("ITEM_REPOSITORY 可选值: memory, positional-sql, named-sql, orm, command-query")?,
            None => RepositoryKind::default(),
        };

        Ok(AppConfig {
            database_url,
            repository,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            seed_test_data: lookup("SEED_TEST_DATA").is_some_and(|s| parse_flag(&s)),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

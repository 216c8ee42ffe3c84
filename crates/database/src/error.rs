use thiserror::Error;

/// 数据库操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误
    #[error("数据库操作错误: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// ORM（sea-orm）错误
    #[error("ORM操作错误: {0}")]
    OrmError(#[from] sea_orm::DbErr),

    /// 连接错误
    #[error("数据库连接错误: {0}")]
    ConnectionError(String),

    /// 迁移错误
    #[error("数据库迁移错误: {0}")]
    MigrationError(String),

    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 商品已经持久化过（id只能由数据库在插入时分配一次）
    #[error("商品已存在ID: {0}")]
    AlreadyPersisted(i64),

    /// 命名参数SQL中引用了未提供的参数
    #[error("缺少SQL参数: {0}")]
    MissingParameter(String),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    /// 创建迁移错误
    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::MigrationError(msg.to_string())
    }

    /// 创建资源不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }
}

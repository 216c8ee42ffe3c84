use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::Report;
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 资源不存在
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Report),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::RepositoryError(err) => match err {
                DatabaseError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Resource not found: {msg}")).into_response(),
                DatabaseError::AlreadyPersisted(id) => {
                    (StatusCode::CONFLICT, format!("Item already persisted: {id}")).into_response()
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response(),
            },
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Resource not found: {msg}")).into_response(),
            AppError::InternalError(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {err}")).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = AppError::RepositoryError(DatabaseError::not_found("item id=1")).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let conflict = AppError::RepositoryError(DatabaseError::AlreadyPersisted(1)).into_response();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let internal = AppError::RepositoryError(DatabaseError::connection("down")).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = AppError::NotFound("item id=2".to_string()).into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}

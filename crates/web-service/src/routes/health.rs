use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// 服务健康检查
#[utoipa::path(get, path = "/health", tag = "health")]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "item-service",
        "repository": state.repository,
    }))
}

use axum::{extract::State, response::IntoResponse};
use serde_json::json;

use super::response::success;
use super::AppState;

/// 健康检查端点
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // 目录加载失败时服务仍可用，只是结果为空
    let catalog_status = if state.catalog.is_empty() { "empty" } else { "loaded" };

    success(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": catalog_status,
        "movie_count": state.catalog.len(),
    }))
}

/// 获取统计信息
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let favorite_count = state
        .favorites
        .ids()
        .await
        .into_iter()
        .filter(|id| state.catalog.contains(*id))
        .count();

    success(json!({
        "movie_count": state.catalog.len(),
        "category_count": state.catalog.categories().len(),
        "favorite_count": favorite_count,
    }))
}

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::error::ApiResult;
use super::favorites::ensure_known;
use super::response::{success, ApiResponse};
use super::AppState;

/// 当前选中的电影（详情页入口），没有或已不在目录中时返回 null
pub async fn get_selection(State(state): State<AppState>) -> impl IntoResponse {
    let movie = match state.selection.selected().await {
        Some(id) => state.catalog.get(id).cloned(),
        None => None,
    };
    success(movie)
}

pub async fn set_selection(
    Path(id): Path<u32>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    ensure_known(&state, id)?;
    state.selection.select(id).await?;
    Ok(ApiResponse::success_with_message(id, "Selection updated"))
}

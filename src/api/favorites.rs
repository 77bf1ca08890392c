use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::movies::parse_param;
use super::response::{success, ApiResponse, FavoriteChange};
use super::AppState;
use crate::models::SortKey;

#[derive(Debug, Deserialize)]
pub struct FavoritesParams {
    pub sort: Option<String>,
}

/// 收藏夹页面：已收藏的电影，按指定方式排序
pub async fn list_favorites(
    Query(params): Query<FavoritesParams>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let sort: SortKey = parse_param("sort", params.sort.as_deref())?.unwrap_or_default();
    let movies = state.favorites.favorite_movies(&state.catalog, sort).await;
    Ok(success(movies))
}

pub async fn add_favorite(
    Path(id): Path<u32>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    ensure_known(&state, id)?;

    let changed = state.favorites.add(id).await?;
    if changed {
        tracing::info!("Added movie {} to favorites", id);
    }

    let message = if changed { "Added to favorites" } else { "Already in favorites" };
    Ok(ApiResponse::success_with_message(
        FavoriteChange {
            id,
            changed,
            is_favorite: true,
        },
        message,
    ))
}

pub async fn remove_favorite(
    Path(id): Path<u32>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    ensure_known(&state, id)?;

    let changed = state.favorites.remove(id).await?;
    if changed {
        tracing::info!("Removed movie {} from favorites", id);
    }

    let message = if changed { "Removed from favorites" } else { "Not in favorites" };
    Ok(ApiResponse::success_with_message(
        FavoriteChange {
            id,
            changed,
            is_favorite: false,
        },
        message,
    ))
}

pub async fn toggle_favorite(
    Path(id): Path<u32>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    ensure_known(&state, id)?;

    let is_favorite = state.favorites.toggle(id).await?;
    tracing::info!("Toggled favorite for movie {}: {}", id, is_favorite);

    Ok(success(FavoriteChange {
        id,
        changed: true,
        is_favorite,
    }))
}

pub(crate) fn ensure_known(state: &AppState, id: u32) -> ApiResult<()> {
    if state.catalog.contains(id) {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Movie {} not found", id)))
    }
}

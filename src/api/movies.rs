use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

use super::error::{ApiError, ApiResult};
use super::response::success;
use super::AppState;
use crate::models::{FilterSpec, MovieDetail, QuickFilter, SortKey};
use crate::session::BrowseSession;

/// 列表查询参数
///
/// 全部按字符串接收，空串视为未设置（表单提交的空输入框）
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub year_from: Option<String>,
    pub year_to: Option<String>,
    pub rating_from: Option<String>,
    pub rating_to: Option<String>,
    pub quick_filter: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    pub fn filter_spec(&self) -> ApiResult<FilterSpec> {
        Ok(FilterSpec {
            search: self.search.clone(),
            category: self.category.clone(),
            year_from: parse_param("year_from", self.year_from.as_deref())?,
            year_to: parse_param("year_to", self.year_to.as_deref())?,
            rating_from: parse_param("rating_from", self.rating_from.as_deref())?,
            rating_to: parse_param("rating_to", self.rating_to.as_deref())?,
            quick_filter: parse_param::<QuickFilter>("quick_filter", self.quick_filter.as_deref())?,
        })
    }

    pub fn sort_key(&self) -> ApiResult<SortKey> {
        Ok(parse_param("sort", self.sort.as_deref())?.unwrap_or_default())
    }

    pub fn page(&self) -> ApiResult<usize> {
        Ok(parse_param("page", self.page.as_deref())?.unwrap_or(1))
    }
}

/// 解析可选参数，空串视为未设置
pub(crate) fn parse_param<T>(name: &str, value: Option<&str>) -> ApiResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| ApiError::BadRequest(format!("Invalid {}: {}", name, e))),
        None => Ok(None),
    }
}

/// 列表页：筛选 → 排序 → 分页
pub async fn list_movies(
    Query(params): Query<ListParams>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let mut session = BrowseSession::new(state.config.page_size);
    session.set_filter(params.filter_spec()?);
    session.set_sort(params.sort_key()?);
    session.set_page(params.page()?);

    Ok(success(session.view(&state.catalog)))
}

pub async fn get_featured(State(state): State<AppState>) -> impl IntoResponse {
    success(state.catalog.featured(state.config.featured_limit))
}

pub async fn get_movie_detail(
    Path(id): Path<u32>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let movie = state
        .catalog
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Movie {} not found", id)))?;

    let is_favorite = state.favorites.is_favorite(id).await;
    Ok(success(MovieDetail { movie, is_favorite }))
}

pub async fn get_related(
    Path(id): Path<u32>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    if !state.catalog.contains(id) {
        return Err(ApiError::NotFound(format!("Movie {} not found", id)));
    }
    Ok(success(state.catalog.related(id, state.config.related_limit)))
}

pub async fn get_categories(State(state): State<AppState>) -> impl IntoResponse {
    success(state.catalog.category_counts())
}

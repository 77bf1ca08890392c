pub mod error;
pub mod favorites;
pub mod health;
pub mod movies;
pub mod response;
pub mod selection;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::storage::{FavoritesStore, KeyValueStore, SelectionStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Catalog,
    pub favorites: FavoritesStore,
    pub selection: SelectionStore,
}

impl AppState {
    /// 收藏与选中记录共用同一个存储后端
    pub fn new(config: AppConfig, catalog: Catalog, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            favorites: FavoritesStore::new(store.clone()),
            selection: SelectionStore::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Movie Browser API v1.0" }))
        // Health and stats
        .route("/api/health", get(health::health_check))
        .route("/api/stats", get(health::get_stats))
        // Movies
        .route("/api/movies", get(movies::list_movies))
        .route("/api/movies/featured", get(movies::get_featured))
        .route("/api/movies/:id", get(movies::get_movie_detail))
        .route("/api/movies/:id/related", get(movies::get_related))
        .route("/api/categories", get(movies::get_categories))
        // Favorites
        .route("/api/favorites", get(favorites::list_favorites))
        .route(
            "/api/favorites/:id",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .route("/api/favorites/:id/toggle", post(favorites::toggle_favorite))
        // Selection hand-off
        .route("/api/selection", get(selection::get_selection))
        .route("/api/selection/:id", put(selection::set_selection))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

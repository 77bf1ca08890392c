// 电影浏览库
//
// 本库提供电影浏览的核心功能，包括：
// - 目录加载
// - 筛选、排序与分页
// - 收藏夹与选中记录的本地存储
// - 浏览会话
// - API 路由

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod session;
pub mod storage;

pub use catalog::{Catalog, CatalogLoad, CatalogSource};
pub use config::AppConfig;
pub use error::{CatalogError, StorageError};
pub use session::{BrowseSession, BrowseView};
pub use storage::{FavoritesStore, KeyValueStore, SelectionStore};

// 目录存储
//
// 每个会话加载一次的只读电影列表，以及基于它的派生视图：
// - 详情查找
// - 分类列表与计数
// - 精选（评分最高）
// - 相关电影（同分类）

pub mod source;

pub use source::{
    source_for, CatalogSource, FileCatalogSource, HttpCatalogSource, MemoryCatalogSource,
};

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::error::CatalogError;
use crate::models::{CategoryCount, Movie, SortKey};
use crate::query;

/// 精选与相关列表的默认长度
pub const DEFAULT_VIEW_LIMIT: usize = 6;

/// 只读目录，克隆开销很小（共享底层列表）
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Arc<Vec<Movie>>,
}

/// 一次加载的结果
///
/// 加载失败时 `catalog` 为空目录，`error` 记录失败原因
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub error: Option<CatalogError>,
}

impl CatalogLoad {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl Catalog {
    /// 从已验证的列表构建目录，ID 重复时返回错误
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
        }
        Ok(Self {
            movies: Arc::new(movies),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// 从数据源加载目录（单次尝试）
    ///
    /// 失败不会中断调用方：返回空目录并附带错误
    pub async fn load(source: &dyn CatalogSource) -> CatalogLoad {
        let result = match source.fetch().await {
            Ok(movies) => Self::new(movies),
            Err(e) => Err(e),
        };

        match result {
            Ok(catalog) => {
                tracing::info!(
                    "成功加载目录: {} ({} 部电影)",
                    source.describe(),
                    catalog.len()
                );
                CatalogLoad {
                    catalog,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!("加载目录失败 {}: {}", source.describe(), e);
                CatalogLoad {
                    catalog: Self::empty(),
                    error: Some(e),
                }
            }
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// 去重后按字母排序的分类列表
    pub fn categories(&self) -> Vec<String> {
        self.category_counts().into_iter().map(|c| c.name).collect()
    }

    /// 每个分类的电影数量，按分类名排序
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for movie in self.movies.iter() {
            *counts.entry(movie.category.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(name, count)| CategoryCount {
                name: name.to_string(),
                count,
            })
            .collect()
    }

    /// 评分最高的前 `limit` 部
    pub fn featured(&self, limit: usize) -> Vec<Movie> {
        let mut featured = query::sort(&self.movies, SortKey::RatingDesc);
        featured.truncate(limit);
        featured
    }

    /// 同分类的其他电影（目录顺序），未知 ID 返回空列表
    pub fn related(&self, id: u32, limit: usize) -> Vec<Movie> {
        let Some(movie) = self.get(id) else {
            return Vec::new();
        };

        self.movies
            .iter()
            .filter(|other| other.category == movie.category && other.id != id)
            .take(limit)
            .cloned()
            .collect()
    }

    /// 选出 ID 在 `ids` 中的电影，保持目录顺序
    pub fn select_ids(&self, ids: &[u32]) -> Vec<Movie> {
        let wanted: HashSet<u32> = ids.iter().copied().collect();
        self.movies
            .iter()
            .filter(|movie| wanted.contains(&movie.id))
            .cloned()
            .collect()
    }
}

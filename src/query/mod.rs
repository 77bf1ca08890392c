// 查询引擎 - 内存中的 筛选 → 排序 → 分页 流水线
//
// filter / sort / paginate 都是纯函数，MovieQuery 只是把它们串起来

pub mod filter;
pub mod pagination;
pub mod sort;

pub use filter::{filter, matches_quick_filter};
pub use pagination::{
    page_count, page_window, paginate, PageSlot, DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE,
};
pub use sort::{compare_titles, sort};

use crate::models::{FilterSpec, Movie, SortKey};

/// 查询构建器
///
/// ```
/// use movie_browser::models::{FilterSpec, SortKey};
/// use movie_browser::query::MovieQuery;
///
/// let result = MovieQuery::new(&[])
///     .with_filters(&FilterSpec::default())
///     .with_sorting(SortKey::RatingDesc)
///     .build();
/// assert!(result.is_empty());
/// ```
pub struct MovieQuery {
    items: Vec<Movie>,
}

impl MovieQuery {
    pub fn new(items: &[Movie]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    pub fn with_filters(mut self, spec: &FilterSpec) -> Self {
        if !spec.is_empty() {
            self.items = filter(&self.items, spec);
        }
        self
    }

    pub fn with_sorting(mut self, key: SortKey) -> Self {
        if key != SortKey::Default {
            self.items = sort(&self.items, key);
        }
        self
    }

    /// 结果总数（分页前）
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// 取出第 `page` 页，同时返回分页前的总数
    pub fn page(self, page: usize, page_size: usize) -> (Vec<Movie>, usize) {
        let total = self.items.len();
        (paginate(&self.items, page, page_size).to_vec(), total)
    }

    pub fn build(self) -> Vec<Movie> {
        self.items
    }
}

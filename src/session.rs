// 浏览会话
//
// 保存列表页的状态（筛选条件、排序方式、当前页、每页数量），
// 并把 筛选 → 排序 → 分页 组合成一次视图计算

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{FilterSpec, Movie, SortKey};
use crate::query::{
    page_count, page_window, MovieQuery, PageSlot, DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE,
};

/// 一页的计算结果
#[derive(Debug, Clone, Serialize)]
pub struct BrowseView {
    pub items: Vec<Movie>,
    pub total_items: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub window: Vec<PageSlot>,
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    filter: FilterSpec,
    sort: SortKey,
    page: usize,
    page_size: usize,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BrowseSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortKey::Default,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 更新筛选条件，页码回到第 1 页
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.page = 1;
    }

    /// 更新排序方式，页码回到第 1 页
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// 计算当前页
    ///
    /// 当前页超出总页数（例如筛选后结果变少）时先重置为第 1 页
    pub fn view(&mut self, catalog: &Catalog) -> BrowseView {
        let query = MovieQuery::new(catalog.movies())
            .with_filters(&self.filter)
            .with_sorting(self.sort);

        let total_pages = page_count(query.total(), self.page_size);
        if self.page == 0 || self.page > total_pages {
            if self.page != 1 {
                tracing::debug!(
                    "页码 {} 超出范围 (共 {} 页)，重置为第 1 页",
                    self.page,
                    total_pages
                );
            }
            self.page = 1;
        }

        let (items, total_items) = query.page(self.page, self.page_size);

        BrowseView {
            items,
            total_items,
            page: self.page,
            page_size: self.page_size,
            total_pages,
            has_previous: self.page > 1,
            has_next: self.page < total_pages,
            window: page_window(self.page, total_pages, DEFAULT_MAX_VISIBLE_PAGES),
        }
    }
}

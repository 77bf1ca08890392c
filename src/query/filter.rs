use crate::models::{FilterSpec, Movie, QuickFilter, HIGH_RATING_THRESHOLD, RECENT_YEAR_THRESHOLD};

/// 按筛选条件过滤电影列表
///
/// 返回输入的子序列（保持原顺序），输入本身不会被修改
pub fn filter(items: &[Movie], spec: &FilterSpec) -> Vec<Movie> {
    let term = spec.search_term();
    let category = spec.category_filter();

    items
        .iter()
        .filter(|movie| {
            // 文本搜索
            term.as_deref().map_or(true, |needle| movie.matches_term(needle))
                // 分类精确匹配（区分大小写）
                && category.map_or(true, |c| movie.category == c)
                // 年份范围（闭区间）
                && spec.year_from.map_or(true, |from| movie.year >= from)
                && spec.year_to.map_or(true, |to| movie.year <= to)
                // 评分范围（闭区间）
                && spec.rating_from.map_or(true, |from| movie.rating >= from)
                && spec.rating_to.map_or(true, |to| movie.rating <= to)
                && spec.quick_filter.map_or(true, |quick| matches_quick_filter(movie, quick))
        })
        .cloned()
        .collect()
}

/// 快捷筛选等价于一个预设的下限
pub fn matches_quick_filter(movie: &Movie, quick: QuickFilter) -> bool {
    match quick {
        QuickFilter::HighRating => movie.rating >= HIGH_RATING_THRESHOLD,
        QuickFilter::Recent => movie.year >= RECENT_YEAR_THRESHOLD,
    }
}

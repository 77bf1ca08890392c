use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 高分快捷筛选的评分下限
pub const HIGH_RATING_THRESHOLD: f32 = 8.0;

/// 近期快捷筛选的年份下限
pub const RECENT_YEAR_THRESHOLD: i32 = 2022;

/// 表示“全部分类”的占位值
pub const ALL_CATEGORIES: &str = "all";

/// 筛选条件
///
/// 所有字段都是可选的，缺省或为空的字段不施加约束，各条件之间为 AND 关系
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub category: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub rating_from: Option<f32>,
    pub rating_to: Option<f32>,
    pub quick_filter: Option<QuickFilter>,
}

impl FilterSpec {
    /// 归一化后的搜索关键字（去空白、转小写），空串视为未设置
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    /// 生效的分类条件，空串和 "all" 视为未设置
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty() && *category != ALL_CATEGORIES)
    }

    /// 是否没有任何生效的条件
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.category_filter().is_none()
            && self.year_from.is_none()
            && self.year_to.is_none()
            && self.rating_from.is_none()
            && self.rating_to.is_none()
            && self.quick_filter.is_none()
    }
}

/// 快捷筛选（互斥）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickFilter {
    /// 评分 >= 8
    HighRating,
    /// 年份 >= 2022
    Recent,
}

impl QuickFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickFilter::HighRating => "high-rating",
            QuickFilter::Recent => "recent",
        }
    }
}

impl std::fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuickFilter {
    type Err = ParseQuickFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high-rating" => Ok(QuickFilter::HighRating),
            "recent" => Ok(QuickFilter::Recent),
            _ => Err(ParseQuickFilterError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid quick filter: {0}")]
pub struct ParseQuickFilterError(pub String);

/// 排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// 保持原有顺序
    #[default]
    Default,
    RatingAsc,
    RatingDesc,
    YearAsc,
    YearDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::RatingAsc => "rating-asc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::YearAsc => "year-asc",
            SortKey::YearDesc => "year-desc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "rating-asc" => Ok(SortKey::RatingAsc),
            "rating-desc" => Ok(SortKey::RatingDesc),
            "year-asc" => Ok(SortKey::YearAsc),
            "year-desc" => Ok(SortKey::YearDesc),
            "title-asc" => Ok(SortKey::TitleAsc),
            "title-desc" => Ok(SortKey::TitleDesc),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid sort key: {0}")]
pub struct ParseSortKeyError(pub String);

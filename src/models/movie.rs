use serde::{Deserialize, Serialize};

/// 电影条目（目录中的一条记录）
///
/// 字段名与目录 JSON 文档一致，所有字段都必须存在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub year: i32,
    pub rating: f32,
    pub director: String,
    pub actors: Vec<String>,
    pub image: String,
}

impl Movie {
    /// 大小写不敏感的关键字匹配
    ///
    /// `needle` 必须已经转换为小写。匹配标题、简介、分类、导演以及任一演员
    pub fn matches_term(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.director.to_lowercase().contains(needle)
            || self
                .actors
                .iter()
                .any(|actor| actor.to_lowercase().contains(needle))
    }
}

/// 详情视图：电影 + 收藏状态
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub is_favorite: bool,
}

/// 分类及其电影数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::models::{Movie, SortKey};

thread_local! {
    // 根语言环境（CLDR root）的三级强度排序规则
    static TITLE_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("无法创建标题排序规则，回退到忽略大小写比较: {}", e);
                None
            }
        }
    };
}

/// 按排序方式返回新的列表，输入不会被修改
///
/// 使用稳定排序，键值相同的条目保持原有相对顺序。
/// 降序使用反向比较器，而不是对升序结果取反
pub fn sort(items: &[Movie], key: SortKey) -> Vec<Movie> {
    let mut sorted = items.to_vec();

    match key {
        SortKey::Default => {}
        SortKey::RatingAsc => sorted.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::RatingDesc => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::YearAsc => sorted.sort_by(|a, b| a.year.cmp(&b.year)),
        SortKey::YearDesc => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::TitleAsc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }

    sorted
}

/// 本地化的标题比较
///
/// 重音和大小写只在基本字母相同时才起作用（"Amélie" < "Éclair" < "Zorro"）；
/// 仅大小写不同时小写在前（"a" < "A"）
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_case_compare(a, b),
    })
}

fn fold_case_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| {
        a.chars()
            .zip(b.chars())
            .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

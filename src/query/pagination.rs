use serde::Serialize;

/// 默认每页数量
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// 分页按钮区最多显示的页码数
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// 页码窗口中的一个位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// 取第 `page` 页（从 1 开始）
///
/// 超出范围的页码返回空切片，不做自动纠正，由调用方负责重置页码
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// 总页数 = ceil(total / page_size)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// 计算需要显示的页码按钮
///
/// 以当前页为中心取最多 `max_visible` 个页码，并始终包含首页和末页；
/// 窗口与首末页之间有间隔时插入省略号
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }

    let max_visible = max_visible.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    // 靠近末尾时向前补齐窗口
    if end - start < max_visible - 1 {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let mut slots = Vec::with_capacity(max_visible + 4);

    if start > 1 {
        slots.push(PageSlot::Page(1));
        if start > 2 {
            slots.push(PageSlot::Ellipsis);
        }
    }

    slots.extend((start..=end).map(PageSlot::Page));

    if end < total {
        if end < total - 1 {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(total));
    }

    slots
}

use std::sync::Arc;

use super::KeyValueStore;
use crate::error::StorageError;

/// 当前选中电影的存储键（列表页 → 详情页）
pub const SELECTED_KEY: &str = "selectedMovieId";

/// 选中记录，值为 ID 的十进制文本
#[derive(Clone)]
pub struct SelectionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SelectionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn select(&self, id: u32) -> Result<(), StorageError> {
        self.store.set(SELECTED_KEY, id.to_string().as_bytes()).await
    }

    /// 读取选中的 ID，缺失或无法解析时返回 `None`
    pub async fn selected(&self) -> Option<u32> {
        let bytes = match self.store.get(SELECTED_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("读取选中记录失败: {}", e);
                return None;
            }
        };

        let parsed = std::str::from_utf8(&bytes)
            .ok()
            .and_then(|text| text.trim().parse::<u32>().ok());
        if parsed.is_none() {
            tracing::warn!("选中记录数据损坏，已忽略");
        }
        parsed
    }

    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(SELECTED_KEY).await
    }
}

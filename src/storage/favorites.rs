// 收藏夹 - 持久化的电影 ID 集合
//
// 每次操作都完整地 读取 → 修改 → 写回 整个集合：
// - 数据缺失视为空集合
// - 数据损坏视为空集合（记录警告），下一次成功写入时自动修复
// - 写入失败返回 StorageError

use std::sync::Arc;
use tokio::sync::Mutex;

use super::KeyValueStore;
use crate::catalog::Catalog;
use crate::error::StorageError;
use crate::models::{Movie, SortKey};
use crate::query;

/// 收藏集合的存储键
pub const FAVORITES_KEY: &str = "favoriteMovies";

/// 收藏夹
///
/// 修改操作由内部互斥锁串行化，调用方看到的读-改-写是原子的
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 当前收藏的所有 ID（读取失败时返回空列表）
    pub async fn ids(&self) -> Vec<u32> {
        match self.read_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("读取收藏夹失败，按空集合处理: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn is_favorite(&self, id: u32) -> bool {
        self.ids().await.contains(&id)
    }

    /// 添加收藏，返回是否为新添加
    pub async fn add(&self, id: u32) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut ids = self.read_ids().await?;
        if ids.contains(&id) {
            return Ok(false);
        }
        ids.push(id);
        self.write_ids(&ids).await?;
        Ok(true)
    }

    /// 移除收藏，返回是否确实移除了
    pub async fn remove(&self, id: u32) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut ids = self.read_ids().await?;
        let Some(index) = ids.iter().position(|existing| *existing == id) else {
            return Ok(false);
        };
        ids.remove(index);
        self.write_ids(&ids).await?;
        Ok(true)
    }

    /// 切换收藏状态，返回切换后是否为收藏
    pub async fn toggle(&self, id: u32) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut ids = self.read_ids().await?;
        let now_favorite = match ids.iter().position(|existing| *existing == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };
        self.write_ids(&ids).await?;
        Ok(now_favorite)
    }

    /// 收藏夹视图：目录中已收藏的电影，按指定方式排序
    pub async fn favorite_movies(&self, catalog: &Catalog, sort: SortKey) -> Vec<Movie> {
        let ids = self.ids().await;
        query::sort(&catalog.select_ids(&ids), sort)
    }

    /// 读取集合；数据损坏时退化为空集合，只有底层读取错误才向上返回
    async fn read_ids(&self) -> Result<Vec<u32>, StorageError> {
        let Some(bytes) = self.store.get(FAVORITES_KEY).await? else {
            return Ok(Vec::new());
        };

        match decode_ids(&bytes) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                tracing::warn!("收藏夹数据损坏，按空集合处理: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn write_ids(&self, ids: &[u32]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(ids)?;
        self.store.set(FAVORITES_KEY, &bytes).await
    }
}

/// 解析持久化的 ID 列表（JSON 数组），重复项只保留第一次出现
pub fn decode_ids(bytes: &[u8]) -> Result<Vec<u32>, StorageError> {
    let raw: Vec<u32> =
        serde_json::from_slice(bytes).map_err(|e| StorageError::Corrupted(e.to_string()))?;

    let mut ids = Vec::with_capacity(raw.len());
    for id in raw {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn favorites() -> (FavoritesStore, MemoryStore) {
        let backend = MemoryStore::new();
        (FavoritesStore::new(Arc::new(backend.clone())), backend)
    }

    #[tokio::test]
    async fn test_add_and_remove() {
        let (store, _) = favorites();

        assert!(store.add(3).await.unwrap());
        assert!(store.is_favorite(3).await);
        assert!(!store.add(3).await.unwrap());

        assert!(store.remove(3).await.unwrap());
        assert!(!store.is_favorite(3).await);
        assert!(!store.remove(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_toggle_twice_is_identity() {
        let (store, _) = favorites();

        assert!(store.toggle(5).await.unwrap());
        assert_eq!(store.ids().await, vec![5]);
        assert!(!store.toggle(5).await.unwrap());
        assert!(store.ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_persisted_format_is_json_array() {
        let (store, backend) = favorites();
        store.add(2).await.unwrap();
        store.add(9).await.unwrap();

        let raw = backend.get(FAVORITES_KEY).await.unwrap().unwrap();
        assert_eq!(raw, b"[2,9]".to_vec());
    }

    #[tokio::test]
    async fn test_corrupt_data_is_empty_and_self_heals() {
        let (store, backend) = favorites();
        backend.set(FAVORITES_KEY, b"{not json").await.unwrap();

        assert!(store.ids().await.is_empty());
        assert!(!store.is_favorite(1).await);

        assert!(store.add(1).await.unwrap());
        assert_eq!(backend.get(FAVORITES_KEY).await.unwrap(), Some(b"[1]".to_vec()));
    }

    #[test]
    fn test_decode_ids_dedupes() {
        assert_eq!(decode_ids(b"[4,1,4,2]").unwrap(), vec![4, 1, 2]);
        assert!(matches!(decode_ids(b"[\"x\"]"), Err(StorageError::Corrupted(_))));
    }

    #[tokio::test]
    async fn test_favorite_movies_view() {
        use crate::models::movie::fixtures::movie;

        let (store, _) = favorites();
        let catalog = Catalog::new(vec![
            movie(1, "Zulu", "Drama", 2000, 5.0),
            movie(2, "Alpha", "Drama", 2001, 6.0),
            movie(3, "Mike", "Drama", 2002, 7.0),
        ])
        .unwrap();

        store.add(3).await.unwrap();
        store.add(1).await.unwrap();
        // 目录中不存在的 ID 被忽略
        store.add(42).await.unwrap();

        let view = store.favorite_movies(&catalog, SortKey::TitleAsc).await;
        let titles: Vec<&str> = view.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Mike", "Zulu"]);
    }
}

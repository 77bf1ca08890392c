// 本地存储 - 键值存储抽象及其上的收藏/选中记录
//
// 存储后端可替换：
// - MemoryStore: 进程内存（测试、临时会话）
// - FileStore: 目录下每个键一个 JSON 文件

pub mod favorites;
pub mod file;
pub mod memory;
pub mod selection;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use selection::{SelectionStore, SELECTED_KEY};

use async_trait::async_trait;
use regex::Regex;

use crate::error::StorageError;

lazy_static::lazy_static! {
    static ref KEY_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// 字节串键值存储
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取键对应的值，不存在时返回 `None`
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// 删除键，不存在时不报错
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// 校验存储键，只允许字母、数字、下划线和连字符
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if KEY_PATTERN.is_match(key) {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

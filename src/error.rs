// 错误类型定义
//
// 目录加载与本地存储各自的错误类型，两者都不会导致程序崩溃：
// - 目录加载失败时退化为空目录
// - 存储数据损坏时退化为空集合

use thiserror::Error;

/// 目录加载错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("请求错误: {0}")]
    Request(String),

    #[error("HTTP 错误: 状态码 {0}")]
    HttpStatus(u16),

    #[error("JSON 解析错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("重复的电影 ID: {0}")]
    DuplicateId(u32),

    #[error("无效的目录地址: {0}")]
    InvalidSource(String),
}

// 实现从 reqwest::Error 到 CatalogError 的转换
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            if let Some(status) = err.status() {
                return CatalogError::HttpStatus(status.as_u16());
            }
        }
        CatalogError::Request(err.to_string())
    }
}

/// 键值存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的存储键: {0}")]
    InvalidKey(String),

    #[error("JSON 序列化错误: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("存储数据损坏: {0}")]
    Corrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CatalogError::DuplicateId(4).to_string(), "重复的电影 ID: 4");
        assert_eq!(CatalogError::HttpStatus(404).to_string(), "HTTP 错误: 状态码 404");
        assert_eq!(
            StorageError::InvalidKey("a/b".to_string()).to_string(),
            "无效的存储键: a/b"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_error = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let error: CatalogError = json_error.into();
        assert!(matches!(error, CatalogError::Parse(_)));
    }
}

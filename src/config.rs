// 应用配置
//
// 从环境变量读取（启动时先加载 .env），无法解析的值回退到默认值并记录警告

use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::DEFAULT_VIEW_LIMIT;
use crate::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 目录地址：本地路径或 http(s) URL
    pub catalog_source: String,
    /// 收藏夹等本地数据的存放目录
    pub storage_dir: PathBuf,
    pub page_size: usize,
    pub featured_limit: usize,
    pub related_limit: usize,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_source: "movies.json".to_string(),
            storage_dir: PathBuf::from("./data"),
            page_size: DEFAULT_PAGE_SIZE,
            featured_limit: DEFAULT_VIEW_LIMIT,
            related_limit: DEFAULT_VIEW_LIMIT,
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源构建配置，便于测试
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            catalog_source: lookup("CATALOG_SOURCE").unwrap_or(defaults.catalog_source),
            storage_dir: lookup("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            page_size: parse_or(&lookup, "PAGE_SIZE", defaults.page_size).max(1),
            featured_limit: parse_or(&lookup, "FEATURED_LIMIT", defaults.featured_limit),
            related_limit: parse_or(&lookup, "RELATED_LIMIT", defaults.related_limit),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} 的值无效: {:?}，使用默认值 {}", key, raw, default);
            default
        }),
        None => default,
    }
}

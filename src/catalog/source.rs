// 目录数据源
//
// 目录是一个静态 JSON 文档（电影数组），可以来自本地文件或 HTTP 地址

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use url::Url;

use crate::error::CatalogError;
use crate::models::Movie;

/// 目录数据源
///
/// 每次调用 `fetch` 只尝试一次，不做重试
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Movie>, CatalogError>;

    /// 用于日志的描述
    fn describe(&self) -> String;
}

/// 本地 JSON 文件
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<Movie>, CatalogError> {
        let content = tokio::fs::read(&self.path).await?;
        let movies = serde_json::from_slice(&content)?;
        Ok(movies)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// 远程 JSON 文档
#[derive(Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: Url,
}

impl HttpCatalogSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<Movie>, CatalogError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status().as_u16()));
        }

        // 先取字节再解析，解析失败归为 Parse 而不是 Request
        let body = response.bytes().await?;
        let movies = serde_json::from_slice(&body)?;
        Ok(movies)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

/// 内存中的固定列表
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    movies: Vec<Movie>,
}

impl MemoryCatalogSource {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalogSource {
    async fn fetch(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} movies)", self.movies.len())
    }
}

/// 根据地址选择数据源：http/https 走网络，其余视为本地路径
pub fn source_for(location: &str) -> Result<Box<dyn CatalogSource>, CatalogError> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidSource(location.to_string()));
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        let url = Url::parse(trimmed)
            .map_err(|e| CatalogError::InvalidSource(format!("{}: {}", trimmed, e)))?;
        return Ok(Box::new(HttpCatalogSource::new(url)));
    }

    Ok(Box::new(FileCatalogSource::new(trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_picks_backend() {
        let http = source_for("https://example.com/movies.json").unwrap();
        assert!(http.describe().starts_with("url "));

        let file = source_for("data/movies.json").unwrap();
        assert_eq!(file.describe(), "file data/movies.json");
    }

    #[test]
    fn test_source_for_rejects_bad_input() {
        assert!(matches!(source_for("   "), Err(CatalogError::InvalidSource(_))));
        assert!(matches!(source_for("http://"), Err(CatalogError::InvalidSource(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileCatalogSource::new("definitely/not/here/movies.json");
        assert!(matches!(source.fetch().await, Err(CatalogError::Io(_))));
    }

    async fn serve_catalog() -> String {
        use axum::{http::StatusCode, routing::get, Router};

        let app = Router::new()
            .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route(
                "/movies.json",
                get(|| async {
                    r#"[{"id": 1, "title": "Heat", "description": "Crime", "category": "Drama",
                        "year": 1995, "rating": 8.3, "director": "Michael Mann",
                        "actors": ["Al Pacino"], "image": "images/1.jpg"}]"#
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_http_source_status_and_body() {
        use crate::catalog::Catalog;

        let base = serve_catalog().await;

        let broken = source_for(&format!("{}/broken", base)).unwrap();
        let load = Catalog::load(broken.as_ref()).await;
        assert!(load.catalog.is_empty());
        assert!(matches!(load.error, Some(CatalogError::HttpStatus(500))));

        let good = source_for(&format!("{}/movies.json", base)).unwrap();
        let load = Catalog::load(good.as_ref()).await;
        assert!(load.is_ok());
        assert_eq!(load.catalog.len(), 1);
        assert_eq!(load.catalog.get(1).map(|m| m.title.as_str()), Some("Heat"));
    }
}

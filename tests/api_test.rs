// API 集成测试
//
// 直接驱动 axum Router，不启动真实服务

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use movie_browser::api::{router, AppState};
use movie_browser::models::Movie;
use movie_browser::storage::MemoryStore;
use movie_browser::{AppConfig, Catalog};
use serde_json::Value;
use tower::ServiceExt;

fn movie(id: u32, title: &str, category: &str, year: i32, rating: f32) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        description: format!("About {}", title),
        category: category.to_string(),
        year,
        rating,
        director: "Director".to_string(),
        actors: vec!["Lead Actor".to_string()],
        image: format!("images/{}.jpg", id),
    }
}

fn app_with(movies: Vec<Movie>) -> Router {
    let config = AppConfig {
        page_size: 9,
        ..AppConfig::default()
    };
    let catalog = Catalog::new(movies).unwrap();
    router(AppState::new(config, catalog, Arc::new(MemoryStore::new())))
}

fn app() -> Router {
    app_with(
        (1..=21)
            .map(|i| {
                let category = if i % 2 == 0 { "Drama" } else { "Comedy" };
                movie(i, &format!("Movie {:02}", i), category, 2000 + i as i32, (i % 10) as f32)
            })
            .collect(),
    )
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn list_movies_paginates() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 9);
    assert_eq!(body["data"]["total_items"], 21);
    assert_eq!(body["data"]["total_pages"], 3);

    let (_, body) = send(&app, Method::GET, "/api/movies?page=3").await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["has_next"], false);
}

#[tokio::test]
async fn list_movies_filters_and_sorts() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/movies?category=Drama&quick_filter=high-rating&sort=rating-desc&year_from=",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Drama 为偶数 ID，评分 = id % 10，>= 8 的只有 8 和 18
    let ids: Vec<u64> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![8, 18]);
}

#[tokio::test]
async fn invalid_sort_is_bad_request() {
    let (status, body) = send(&app(), Method::GET, "/api/movies?sort=popular").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["type"], "bad_request");
}

#[tokio::test]
async fn detail_related_and_featured() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/movies/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Movie 04");
    assert_eq!(body["data"]["is_favorite"], false);

    let (status, _) = send(&app, Method::GET, "/api/movies/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/movies/4/related").await;
    let related = body["data"].as_array().unwrap();
    assert_eq!(related.len(), 6);
    assert!(related.iter().all(|m| m["category"] == "Drama" && m["id"] != 4));

    let (_, body) = send(&app, Method::GET, "/api/movies/featured").await;
    let featured = body["data"].as_array().unwrap();
    assert_eq!(featured.len(), 6);
    assert_eq!(featured[0]["rating"], 9.0);
}

#[tokio::test]
async fn categories_with_counts() {
    let (_, body) = send(&app(), Method::GET, "/api/categories").await;
    assert_eq!(body["data"][0]["name"], "Comedy");
    assert_eq!(body["data"][0]["count"], 11);
    assert_eq!(body["data"][1]["name"], "Drama");
    assert_eq!(body["data"][1]["count"], 10);
}

#[tokio::test]
async fn favorites_lifecycle() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/favorites/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["changed"], true);

    let (_, body) = send(&app, Method::POST, "/api/favorites/5").await;
    assert_eq!(body["data"]["changed"], false);

    let (_, body) = send(&app, Method::POST, "/api/favorites/2/toggle").await;
    assert_eq!(body["data"]["is_favorite"], true);

    let (_, body) = send(&app, Method::GET, "/api/favorites?sort=title-desc").await;
    let ids: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 2]);

    let (_, body) = send(&app, Method::GET, "/api/movies/5").await;
    assert_eq!(body["data"]["is_favorite"], true);

    let (_, body) = send(&app, Method::DELETE, "/api/favorites/5").await;
    assert_eq!(body["data"]["changed"], true);
    let (_, body) = send(&app, Method::GET, "/api/stats").await;
    assert_eq!(body["data"]["favorite_count"], 1);

    let (status, _) = send(&app, Method::POST, "/api/favorites/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn selection_hand_off() {
    let app = app();

    let (_, body) = send(&app, Method::GET, "/api/selection").await;
    assert!(body["data"].is_null());

    let (status, _) = send(&app, Method::PUT, "/api/selection/3").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/selection").await;
    assert_eq!(body["data"]["id"], 3);
}

#[tokio::test]
async fn empty_catalog_degrades_gracefully() {
    let app = app_with(Vec::new());

    let (status, body) = send(&app, Method::GET, "/api/movies?page=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["total_pages"], 0);

    let (_, body) = send(&app, Method::GET, "/api/health").await;
    assert_eq!(body["data"]["catalog"], "empty");
}

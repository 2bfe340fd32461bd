#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method, Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use watchme_api::config::ServerConfig;
use watchme_api::router::{build_app_router, AppService};
use watchme_api::state::AppState;
use watchme_core::show::DEFAULT_POSTER_URL;
use watchme_db::store::{MemoryShowStore, ShowStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        max_connections: 1,
        placeholder_poster_url: DEFAULT_POSTER_URL.to_string(),
    }
}

/// Build the full application router over the given in-memory store.
///
/// Uses the same builder as `main.rs`, so the full middleware stack is
/// exercised.
pub fn build_test_app(store: Arc<MemoryShowStore>) -> AppService {
    build_test_app_with_config(store, test_config())
}

/// Build the application over any store, e.g. one that misbehaves on purpose.
pub fn build_test_app_with_config(store: Arc<dyn ShowStore>, config: ServerConfig) -> AppService {
    build_app_router(AppState::new(store, config))
}

/// A complete, valid show body.
pub fn show_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "type": "Movie",
        "status": "Watching",
        "rating": 7,
        "notes": "",
        "watched_at": "2024-04-20",
        "genre": "Drama, Thriller",
        "poster_url": "https://example.com/poster.jpg",
    })
}

pub async fn send(app: &AppService, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &AppService, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &AppService, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &AppService, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &AppService, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: &AppService,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

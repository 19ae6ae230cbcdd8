#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use forum_api::config::ServerConfig;
use forum_api::router::build_app_router;
use forum_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// State is initialised the way `main.rs` does it, so the post id generator
/// continues after whatever earlier requests in the test stored.
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::init(pool, config.clone()).await.unwrap();
    build_app_router(state, &config)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_user(pool: &PgPool, nickname: &str) {
    let app = build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        &format!("/api/user/{nickname}/create"),
        serde_json::json!({
            "fullname": format!("{nickname} Fullname"),
            "about": "",
            "email": format!("{nickname}@example.com"),
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "create user {nickname}");
}

pub async fn create_forum(pool: &PgPool, slug: &str, owner: &str) {
    let app = build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        "/api/forum/create",
        serde_json::json!({"title": "Forum", "user": owner, "slug": slug}),
    )
    .await;
    assert_eq!(response.status(), 201, "create forum {slug}");
}

/// Create a thread and return its id.
pub async fn create_thread(pool: &PgPool, forum: &str, author: &str, slug: Option<&str>) -> i64 {
    let app = build_test_app(pool.clone()).await;
    let mut body = serde_json::json!({
        "title": "Thread",
        "author": author,
        "message": "Opening message",
    });
    if let Some(slug) = slug {
        body["slug"] = serde_json::json!(slug);
    }
    let response = post_json(app, &format!("/api/forum/{forum}/create"), body).await;
    assert_eq!(response.status(), 201, "create thread in {forum}");
    body_json(response).await["id"].as_i64().unwrap()
}

/// User `alice`, forum `pirates` and one thread slugged `voyage`.
pub async fn seed(pool: &PgPool) -> i64 {
    create_user(pool, "alice").await;
    create_forum(pool, "pirates", "alice").await;
    create_thread(pool, "pirates", "alice", Some("voyage")).await
}

/// Create posts in `thread` with the given parents; returns their ids.
pub async fn create_posts(pool: &PgPool, thread: i64, parents: &[i64]) -> Vec<i64> {
    let body: Vec<serde_json::Value> = parents
        .iter()
        .map(|parent| serde_json::json!({"parent": parent, "author": "alice", "message": "hi"}))
        .collect();
    let app = build_test_app(pool.clone()).await;
    let response = post_json(
        app,
        &format!("/api/thread/{thread}/create"),
        serde_json::Value::Array(body),
    )
    .await;
    assert_eq!(response.status(), 201, "create posts in {thread}");
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["id"].as_i64().unwrap())
        .collect()
}

pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|post| post["id"].as_i64().unwrap())
        .collect()
}

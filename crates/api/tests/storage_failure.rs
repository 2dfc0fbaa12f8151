//! Storage failures surface as 500 with the driver's message.
//!
//! The lazy pool in `common` points at a port nothing listens on, so every
//! query fails once the 1s acquire timeout runs out. That is well inside
//! the 30s request timeout.

mod common;

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::{body_text, delete, get, lazy_pool, post_json, put_json, send_raw};
use serde_json::json;

async fn assert_storage_error(response: axum::http::Response<Body>) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert!(!body_text(response).await.is_empty());
}

#[tokio::test]
async fn list_actors_with_unreachable_database_returns_500() {
    let app = common::build_test_app(lazy_pool());
    let started = Instant::now();

    let response = get(app, "/actors").await;

    assert!(started.elapsed() < Duration::from_secs(15));
    assert_storage_error(response).await;
}

#[tokio::test]
async fn list_users_with_unreachable_database_returns_500() {
    let app = common::build_test_app(lazy_pool());
    assert_storage_error(get(app, "/users").await).await;
}

#[tokio::test]
async fn create_movie_with_unreachable_database_returns_500() {
    let app = common::build_test_app(lazy_pool());
    let response = post_json(app, "/movies", json!({"title": "Heat"})).await;

    assert_storage_error(response).await;
}

#[tokio::test]
async fn update_actor_with_unreachable_database_returns_500() {
    let app = common::build_test_app(lazy_pool());
    let response = put_json(app, "/actors", json!({"id": 1, "name": "Nobody"})).await;

    assert_storage_error(response).await;
}

#[tokio::test]
async fn delete_movie_with_unreachable_database_returns_500() {
    let app = common::build_test_app(lazy_pool());
    assert_storage_error(delete(app, "/movies?id=1").await).await;
}

#[tokio::test]
async fn create_user_with_unreachable_database_returns_500() {
    let app = common::build_test_app(lazy_pool());
    let response = send_raw(
        app,
        Method::POST,
        "/users",
        Body::from(r#"{"username":"alice","password":"secret","role":"admin"}"#),
    )
    .await;

    assert_storage_error(response).await;
}

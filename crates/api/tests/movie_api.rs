//! HTTP-level integration tests for `/movies`.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_list_has_empty_actors(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/movies",
        json!({
            "title": "Forrest Gump",
            "description": "Life is like a box of chocolates",
            "release_date": "1994-07-06",
            "rating": "8.8",
            "actors": [{"id": 1, "name": "Tom Hanks"}]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_text(response).await, "Movie added successfully");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies").await).await;
    let movies = json.as_array().unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Forrest Gump");
    assert_eq!(movies[0]["release_date"], "1994-07-06");
    assert_eq!(movies[0]["rating"], "8.8");
    assert_eq!(movies[0]["actors"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_movie(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies", json!({"title": "Draft"})).await;

    let id: i64 = sqlx::query_scalar("SELECT id FROM movies WHERE title = 'Draft'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/movies",
        json!({"id": id, "title": "Final", "description": "d", "release_date": "2001", "rating": "7"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Movie updated successfully");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies").await).await;
    assert_eq!(json[0]["title"], "Final");
    assert_eq!(json[0]["description"], "d");
    assert_eq!(json[0]["rating"], "7");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_movie(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies", json!({"title": "Gone"})).await;

    let id: i64 = sqlx::query_scalar("SELECT id FROM movies WHERE title = 'Gone'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/movies?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Movie deleted successfully");

    let app = common::build_test_app(pool);
    assert_eq!(body_json(get(app, "/movies").await).await, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_movie_without_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/movies").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Missing movie ID"));
}

async fn movie_titles(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar("SELECT title FROM movies ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_movie_returns_200_without_insert(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/movies", json!({"id": 999999, "title": "Ghost"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(movie_titles(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_movie_returns_200(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies", json!({"title": "Survivor"})).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/movies?id=999999").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(movie_titles(&pool).await, vec!["Survivor".to_string()]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_with_repeated_id_removes_only_first(pool: PgPool) {
    for title in ["First", "Second"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/movies", json!({"title": title})).await;
    }
    let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM movies ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/movies?id={}&id={}", ids[0], ids[1])).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(movie_titles(&pool).await, vec!["Second".to_string()]);
}

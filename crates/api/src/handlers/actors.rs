//! Handlers for the `/actors` resource.
//!
//! Update and delete do not check that the row exists; zero affected rows
//! is still a success.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmoteka_db::models::actor::Actor;
use filmoteka_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::query::IdParams;
use crate::state::AppState;

/// GET /actors
pub async fn list_actors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list(&state.pool).await?;

    Ok(Json(actors))
}

/// POST /actors
///
/// Any `id` in the body is ignored; the database assigns one.
pub async fn create_actor(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<Actor>,
) -> AppResult<impl IntoResponse> {
    let actor_id = ActorRepo::create(&state.pool, &input).await?;

    tracing::info!(actor_id, "Actor added");

    Ok((StatusCode::CREATED, "Actor added successfully"))
}

/// PUT /actors
///
/// Full-record replace keyed by the `id` in the body.
pub async fn update_actor(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<Actor>,
) -> AppResult<impl IntoResponse> {
    let rows_affected = ActorRepo::update(&state.pool, &input).await?;

    tracing::info!(actor_id = input.id, rows_affected, "Actor updated");

    Ok((StatusCode::OK, "Actor updated successfully"))
}

/// DELETE /actors?id={id}
pub async fn delete_actor(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params
        .id()
        .ok_or_else(|| AppError::BadRequest("Missing actor ID".into()))?;

    let rows_affected = ActorRepo::delete(&state.pool, id).await?;

    tracing::info!(actor_id = id, rows_affected, "Actor deleted");

    Ok((StatusCode::OK, "Actor deleted successfully"))
}

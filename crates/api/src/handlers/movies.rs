//! Handlers for the `/movies` resource.
//!
//! Same contract as `/actors`. The `actors` list on a movie is accepted in
//! request bodies but never stored, and is always empty in responses.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmoteka_db::models::movie::Movie;
use filmoteka_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::query::IdParams;
use crate::state::AppState;

/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.pool).await?;

    Ok(Json(movies))
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<Movie>,
) -> AppResult<impl IntoResponse> {
    if !input.actors.is_empty() {
        tracing::debug!(dropped = input.actors.len(), "Ignoring actors on movie create");
    }

    let movie_id = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id, "Movie added");

    Ok((StatusCode::CREATED, "Movie added successfully"))
}

/// PUT /movies
pub async fn update_movie(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<Movie>,
) -> AppResult<impl IntoResponse> {
    let rows_affected = MovieRepo::update(&state.pool, &input).await?;

    tracing::info!(movie_id = input.id, rows_affected, "Movie updated");

    Ok((StatusCode::OK, "Movie updated successfully"))
}

/// DELETE /movies?id={id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params
        .id()
        .ok_or_else(|| AppError::BadRequest("Missing movie ID".into()))?;

    let rows_affected = MovieRepo::delete(&state.pool, id).await?;

    tracing::info!(movie_id = id, rows_affected, "Movie deleted");

    Ok((StatusCode::OK, "Movie deleted successfully"))
}

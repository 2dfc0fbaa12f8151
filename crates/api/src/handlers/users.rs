//! Handlers for the `/users` resource (list and create only).
//!
//! `role` is stored as given and never consulted by any endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmoteka_db::models::user::CreateUser;
use filmoteka_db::repositories::UserRepo;

use crate::auth::password::password_for_storage;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /users
///
/// Returns `{id, username, role}` objects; the password column is never selected.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;

    Ok(Json(users))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let mode = state.config.password_storage;
    let password = password_for_storage(&input.password, mode)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    let user_id = UserRepo::create(&state.pool, &input.username, &password, &input.role).await?;

    tracing::info!(user_id, username = %input.username, password_storage = %mode, "User added");

    Ok((StatusCode::CREATED, "User added successfully"))
}

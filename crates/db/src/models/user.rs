//! User entity model and DTOs.

use filmoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public user representation for list responses (no password).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

/// DTO for creating a new user.
///
/// `role` is free text and grants nothing. A client-supplied `id` is
/// accepted in the payload and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

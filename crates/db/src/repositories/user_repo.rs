//! Repository for the `users` table.

use filmoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::UserResponse;

/// Columns safe to return to clients. `password` is deliberately absent.
const PUBLIC_COLUMNS: &str = "id, username, role";

/// Provides list and create operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the server-assigned id.
    ///
    /// `password` is written as given; callers decide whether it is the raw
    /// value or a hash.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO users (username, password, role)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(username)
        .bind(password)
        .bind(role)
        .fetch_one(pool)
        .await
    }

    /// List all users without their passwords, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserResponse>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, UserResponse>(&query)
            .fetch_all(pool)
            .await
    }
}

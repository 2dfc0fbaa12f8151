//! Repository for the `movies` table.
//!
//! The `actors` field on [`Movie`] has no storage; nothing here reads or
//! writes it.

use filmoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Movie;

const COLUMNS: &str = "id, title, description, release_date, rating";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Insert a new movie, returning the server-assigned id.
    pub async fn create(pool: &PgPool, input: &Movie) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movies (title, description, release_date, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.release_date)
        .bind(&input.rating)
        .fetch_one(pool)
        .await
    }

    /// Replace every column of the movie identified by `input.id`.
    pub async fn update(pool: &PgPool, input: &Movie) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET title = $1, description = $2, release_date = $3, rating = $4
             WHERE id = $5",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.release_date)
        .bind(&input.rating)
        .bind(input.id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete the movie whose id matches the raw query-string value.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1::BIGINT")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

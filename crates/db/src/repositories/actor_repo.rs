//! Repository for the `actors` table.

use filmoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::Actor;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, gender, date_of_birth";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// List every actor ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Insert a new actor, returning the server-assigned id.
    ///
    /// `input.id` is never written.
    pub async fn create(pool: &PgPool, input: &Actor) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO actors (name, gender, date_of_birth)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.gender)
        .bind(&input.date_of_birth)
        .fetch_one(pool)
        .await
    }

    /// Replace every column of the actor identified by `input.id`.
    ///
    /// Returns the number of rows affected; zero means no such actor.
    pub async fn update(pool: &PgPool, input: &Actor) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actors SET name = $1, gender = $2, date_of_birth = $3 WHERE id = $4",
        )
        .bind(&input.name)
        .bind(&input.gender)
        .bind(&input.date_of_birth)
        .bind(input.id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete the actor whose id matches the raw query-string value.
    ///
    /// The value is cast to `BIGINT` by Postgres, so a non-numeric id
    /// surfaces as a database error.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1::BIGINT")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

//! Movie entity model.

use filmoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::actor::Actor;

/// A row from the `movies` table, and the request body for create/update.
///
/// `actors` has no backing column or join table. It is never read from
/// storage, any client-supplied value is dropped on write, and it always
/// serializes as an empty array.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub rating: String,
    #[sqlx(skip)]
    pub actors: Vec<Actor>,
}

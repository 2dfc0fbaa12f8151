//! Actor entity model.

use filmoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table, and the request body for create/update.
///
/// Missing JSON fields default to empty strings (and `id` to 0). The id is
/// ignored on create; on update it selects the row to replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub gender: String,
    /// Opaque text; no date format is enforced.
    pub date_of_birth: String,
}

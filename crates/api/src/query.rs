//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?id=` parameter used by DELETE endpoints.
///
/// The query string is read as ordered pairs and the first `id` wins, so a
/// repeated key is not an error. The value stays raw text: empty counts as
/// missing and anything else is handed to the database unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct IdParams {
    id: Option<String>,
}

impl From<Vec<(String, String)>> for IdParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value));
        Self { id }
    }
}

impl IdParams {
    /// The id value, or `None` when absent or empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

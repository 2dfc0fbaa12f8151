use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Service health, outside the resource tree.
///
/// ```text
/// GET    /health            -> health
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}

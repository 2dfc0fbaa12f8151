use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::routes::only;
use crate::state::AppState;

/// User routes. There is no update or delete.
///
/// ```text
/// GET    /users             -> list_users
/// POST   /users             -> create_user
/// *      /users             -> 405
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users",
        only(get(users::list_users).post(users::create_user), "GET,POST"),
    )
}

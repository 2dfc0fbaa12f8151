use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::routes::only;
use crate::state::AppState;

/// Actor routes.
///
/// ```text
/// GET    /actors            -> list_actors
/// POST   /actors            -> create_actor
/// PUT    /actors            -> update_actor
/// DELETE /actors?id={id}    -> delete_actor
/// *      /actors            -> 405
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/actors",
        only(
            get(actors::list_actors)
                .post(actors::create_actor)
                .put(actors::update_actor)
                .delete(actors::delete_actor),
            "GET,POST,PUT,DELETE",
        ),
    )
}

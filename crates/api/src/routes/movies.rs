use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::routes::only;
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET    /movies            -> list_movies
/// POST   /movies            -> create_movie
/// PUT    /movies            -> update_movie
/// DELETE /movies?id={id}    -> delete_movie
/// *      /movies            -> 405
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/movies",
        only(
            get(movies::list_movies)
                .post(movies::create_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
            "GET,POST,PUT,DELETE",
        ),
    )
}

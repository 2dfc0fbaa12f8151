pub mod actors;
pub mod health;
pub mod movies;
pub mod users;

use axum::http::{header, StatusCode};
use axum::routing::MethodRouter;
use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /actors     GET list, POST create, PUT update, DELETE delete (?id=)
/// /movies     GET list, POST create, PUT update, DELETE delete (?id=)
/// /users      GET list, POST create
/// ```
///
/// Any other method on these paths, `HEAD` and `OPTIONS` included, is
/// answered with 405 and an empty body; unknown paths get the default 404.
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .merge(actors::router())
        .merge(movies::router())
        .merge(users::router())
}

/// Close `methods` over exactly the verbs it already serves.
///
/// axum would otherwise answer `HEAD` with the `GET` handler. Both the
/// explicit `HEAD` route and the fallback reply 405 with `allow` as the
/// `Allow` header.
pub(crate) fn only(
    methods: MethodRouter<AppState>,
    allow: &'static str,
) -> MethodRouter<AppState> {
    let reject = move || async move { (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, allow)]) };

    methods.head(reject).fallback(reject)
}

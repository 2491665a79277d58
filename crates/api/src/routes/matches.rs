use axum::routing::get;
use axum::Router;

use crate::handlers::matches;
use crate::state::AppState;

/// Routes mounted at `/matches`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(matches::list).post(matches::create))
        .route(
            "/{id}",
            get(matches::get_by_id)
                .put(matches::update)
                .delete(matches::delete),
        )
}

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::teams;
use crate::state::AppState;

/// Routes mounted at `/teams`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/restore    -> restore
/// PUT    /{id}/logo       -> set_logo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(teams::list).post(teams::create))
        .route(
            "/{id}",
            get(teams::get_by_id)
                .put(teams::update)
                .delete(teams::delete),
        )
        .route("/{id}/restore", post(teams::restore))
        .route("/{id}/logo", put(teams::set_logo))
}

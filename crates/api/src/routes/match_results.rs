use axum::routing::get;
use axum::Router;

use crate::handlers::match_results;
use crate::state::AppState;

/// Routes mounted at `/match_results`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /report    -> report
/// GET    /{id}      -> get_by_id
/// ```
///
/// `/report` is a static segment and wins over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(match_results::list).post(match_results::create))
        .route("/report", get(match_results::report))
        .route("/{id}", get(match_results::get_by_id))
}

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::players;
use crate::state::AppState;

/// Routes mounted at `/players`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/restore      -> restore
/// GET    /team/{team_id}    -> list_by_team
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(players::list).post(players::create))
        .route(
            "/{id}",
            get(players::get_by_id)
                .put(players::update)
                .delete(players::delete),
        )
        .route("/{id}/restore", post(players::restore))
        .route("/team/{team_id}", get(players::list_by_team))
}

pub mod health;
pub mod match_results;
pub mod matches;
pub mod players;
pub mod sessions;
pub mod teams;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                      login (public)
///
/// /teams                         list, create
/// /teams/{id}                    get, update, delete
/// /teams/{id}/restore            restore (POST)
/// /teams/{id}/logo               set logo reference (PUT)
///
/// /players                       list, create
/// /players/{id}                  get, update, delete
/// /players/{id}/restore          restore (POST)
/// /players/team/{team_id}        players of one team
///
/// /matches                       list, create
/// /matches/{id}                  get, update, delete
///
/// /match_results                 list, create
/// /match_results/report          report
/// /match_results/{id}            get
/// ```
///
/// Reads are public; every write requires an admin token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sessions", sessions::router())
        .nest("/teams", teams::router())
        .nest("/players", players::router())
        .nest("/matches", matches::router())
        .nest("/match_results", match_results::router())
}

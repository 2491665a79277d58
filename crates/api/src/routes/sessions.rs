use axum::routing::post;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /            -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(sessions::login))
}

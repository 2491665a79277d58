//! Service health check, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// 200 with the service version while the database answers, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> Response {
    match league_db::health_check(&state.pool).await {
        Ok(()) => ApiResponse::ok(
            "League service is healthy",
            HealthStatus {
                version: env!("CARGO_PKG_VERSION"),
                database: "ok",
            },
        )
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed to reach database");
            ApiResponse::error(StatusCode::SERVICE_UNAVAILABLE, "Database unreachable")
                .into_response()
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

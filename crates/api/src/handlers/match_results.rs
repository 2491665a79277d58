//! Handlers for the `/match_results` resource.

use axum::extract::State;
use league_core::report::ReportRow;
use league_core::types::DbId;
use league_db::models::match_result::{CreateMatchResult, MatchResultWithGoals};
use league_db::repositories::MatchResultRepo;
use validator::Validate;

use crate::aggregator;
use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/match_results
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<MatchResultWithGoals>>> {
    let results = MatchResultRepo::list_with_goals(&state.pool).await?;
    Ok(ApiResponse::ok("Match results retrieved successfully", results))
}

/// GET /api/v1/match_results/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<MatchResultWithGoals>> {
    let result = MatchResultRepo::find_by_id_with_goals(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Match result", id))?;
    Ok(ApiResponse::ok("Match result retrieved successfully", result))
}

/// POST /api/v1/match_results
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMatchResult>,
) -> AppResult<ApiResponse<MatchResultWithGoals>> {
    input.validate()?;
    let created = aggregator::create_result(&state.pool, &input).await?;
    Ok(ApiResponse::created("Match result created successfully", created))
}

/// GET /api/v1/match_results/report
pub async fn report(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<ReportRow>>> {
    let rows = aggregator::generate_report(&state.pool, state.config.win_count_mode).await?;
    Ok(ApiResponse::ok("Match report generated successfully", rows))
}

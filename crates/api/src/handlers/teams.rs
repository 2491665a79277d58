//! Handlers for the `/teams` resource.

use axum::extract::State;
use league_core::types::DbId;
use league_db::models::team::{CreateTeam, SetTeamLogo, Team, UpdateTeam};
use league_db::repositories::TeamRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/teams
pub async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Team>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok(ApiResponse::ok("Teams retrieved successfully", teams))
}

/// GET /api/v1/teams/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<Team>> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Team", id))?;
    Ok(ApiResponse::ok("Team retrieved successfully", team))
}

/// POST /api/v1/teams
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTeam>,
) -> AppResult<ApiResponse<Team>> {
    input.validate()?;
    let team = TeamRepo::create(&state.pool, &input).await?;
    tracing::info!(team_id = team.id, user_id = admin.user_id, "Team created");
    Ok(ApiResponse::created("Team created successfully", team))
}

/// PUT /api/v1/teams/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeam>,
) -> AppResult<ApiResponse<Team>> {
    input.validate()?;
    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Team", id))?;
    Ok(ApiResponse::ok("Team updated successfully", team))
}

/// PUT /api/v1/teams/{id}/logo
///
/// Stores a reference to an already-uploaded logo.
pub async fn set_logo(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetTeamLogo>,
) -> AppResult<ApiResponse<Team>> {
    input.validate()?;
    let team = TeamRepo::set_logo(&state.pool, id, &input.logo)
        .await?
        .ok_or(AppError::not_found("Team", id))?;
    Ok(ApiResponse::ok("Team logo updated successfully", team))
}

/// DELETE /api/v1/teams/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<()>> {
    if !TeamRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found("Team", id));
    }
    tracing::info!(team_id = id, user_id = admin.user_id, "Team deleted");
    Ok(ApiResponse::message("Team deleted successfully"))
}

/// POST /api/v1/teams/{id}/restore
pub async fn restore(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<()>> {
    if !TeamRepo::restore(&state.pool, id).await? {
        return Err(AppError::not_found("Team", id));
    }
    Ok(ApiResponse::message("Team restored successfully"))
}

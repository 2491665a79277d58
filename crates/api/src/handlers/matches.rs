//! Handlers for the `/matches` resource.

use axum::extract::State;
use league_core::error::CoreError;
use league_core::types::DbId;
use league_db::models::matches::{CreateMatch, MatchWithTeams, UpdateMatch};
use league_db::repositories::{MatchRepo, TeamRepo};
use league_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// A fixture's identifying slot: date, time, and both sides.
struct Schedule<'a> {
    date: &'a str,
    time: &'a str,
    home_team_id: DbId,
    away_team_id: DbId,
}

/// Check both teams exist and differ, and that no other active match holds
/// the same slot.
async fn check_schedule(
    pool: &DbPool,
    schedule: &Schedule<'_>,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if schedule.home_team_id == schedule.away_team_id {
        return Err(AppError::Core(CoreError::Validation(
            "Home and away team must be different".into(),
        )));
    }
    for team_id in [schedule.home_team_id, schedule.away_team_id] {
        TeamRepo::find_by_id(pool, team_id)
            .await?
            .ok_or(AppError::not_found("Team", team_id))?;
    }

    let clash = MatchRepo::find_by_schedule(
        pool,
        schedule.date,
        schedule.time,
        schedule.home_team_id,
        schedule.away_team_id,
        exclude_id,
    )
    .await?;
    if let Some(existing) = clash {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Match with the same schedule already exists (match ID {})",
            existing.id
        ))));
    }
    Ok(())
}

/// Load a match with its teams or fail with 404.
async fn fetch(pool: &DbPool, id: DbId) -> AppResult<MatchWithTeams> {
    MatchRepo::find_with_teams(pool, id)
        .await?
        .ok_or(AppError::not_found("Match", id))
}

/// GET /api/v1/matches
pub async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<MatchWithTeams>>> {
    let matches = MatchRepo::list_with_teams(&state.pool).await?;
    Ok(ApiResponse::ok("Matches retrieved successfully", matches))
}

/// GET /api/v1/matches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<MatchWithTeams>> {
    let found = fetch(&state.pool, id).await?;
    Ok(ApiResponse::ok("Match retrieved successfully", found))
}

/// POST /api/v1/matches
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMatch>,
) -> AppResult<ApiResponse<MatchWithTeams>> {
    input.validate()?;
    let schedule = Schedule {
        date: &input.date,
        time: &input.time,
        home_team_id: input.home_team_id,
        away_team_id: input.away_team_id,
    };
    check_schedule(&state.pool, &schedule, None).await?;

    let created = MatchRepo::create(&state.pool, &input).await?;
    tracing::info!(
        match_id = created.id,
        date = %created.date,
        time = %created.time,
        "Match created",
    );
    let with_teams = fetch(&state.pool, created.id).await?;
    Ok(ApiResponse::created("Match created successfully", with_teams))
}

/// PUT /api/v1/matches/{id}
///
/// The schedule check runs against the match as it would be after the
/// update, ignoring the match itself.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMatch>,
) -> AppResult<ApiResponse<MatchWithTeams>> {
    input.validate()?;
    let current = MatchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Match", id))?;

    let schedule = Schedule {
        date: input.date.as_deref().unwrap_or(&current.date),
        time: input.time.as_deref().unwrap_or(&current.time),
        home_team_id: input.home_team_id.unwrap_or(current.home_team_id),
        away_team_id: input.away_team_id.unwrap_or(current.away_team_id),
    };
    check_schedule(&state.pool, &schedule, Some(id)).await?;

    MatchRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Match", id))?;
    let with_teams = fetch(&state.pool, id).await?;
    Ok(ApiResponse::ok("Match updated successfully", with_teams))
}

/// DELETE /api/v1/matches/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<()>> {
    if !MatchRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found("Match", id));
    }
    tracing::info!(match_id = id, "Match deleted");
    Ok(ApiResponse::message("Match deleted successfully"))
}

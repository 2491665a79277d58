//! Handlers for the `/players` resource.
//!
//! A shirt number is unique among a team's active players. The check runs
//! before every write; the partial unique index backs it up under races.

use axum::extract::State;
use league_core::error::CoreError;
use league_core::types::DbId;
use league_db::models::player::{CreatePlayer, Player, UpdatePlayer};
use league_db::repositories::{PlayerRepo, TeamRepo};
use league_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Fail with 404 unless `team_id` names an active team.
async fn ensure_team(pool: &DbPool, team_id: DbId) -> AppResult<()> {
    TeamRepo::find_by_id(pool, team_id)
        .await?
        .ok_or(AppError::not_found("Team", team_id))?;
    Ok(())
}

/// Fail with 409 if another active player on `team_id` wears `number`.
async fn ensure_number_free(
    pool: &DbPool,
    team_id: DbId,
    number: i32,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if PlayerRepo::number_taken(pool, team_id, number, exclude_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Player number {number} already used in team {team_id}"
        ))));
    }
    Ok(())
}

/// GET /api/v1/players
pub async fn list(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Player>>> {
    let players = PlayerRepo::list(&state.pool).await?;
    Ok(ApiResponse::ok("Players retrieved successfully", players))
}

/// GET /api/v1/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<Player>> {
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Player", id))?;
    Ok(ApiResponse::ok("Player retrieved successfully", player))
}

/// GET /api/v1/players/team/{team_id}
pub async fn list_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<DbId>,
) -> AppResult<ApiResponse<Vec<Player>>> {
    ensure_team(&state.pool, team_id).await?;
    let players = PlayerRepo::list_by_team(&state.pool, team_id).await?;
    Ok(ApiResponse::ok("Players retrieved successfully", players))
}

/// POST /api/v1/players
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<ApiResponse<Player>> {
    input.validate()?;
    ensure_team(&state.pool, input.team_id).await?;
    ensure_number_free(&state.pool, input.team_id, input.number, None).await?;

    let player = PlayerRepo::create(&state.pool, &input).await?;
    tracing::info!(
        player_id = player.id,
        team_id = player.team_id,
        number = player.number,
        "Player created",
    );
    Ok(ApiResponse::created("Player created successfully", player))
}

/// PUT /api/v1/players/{id}
///
/// The number check uses the player's team after the update, so a transfer
/// is rejected when the new team already has that number.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlayer>,
) -> AppResult<ApiResponse<Player>> {
    input.validate()?;
    let current = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Player", id))?;

    let team_id = input.team_id.unwrap_or(current.team_id);
    let number = input.number.unwrap_or(current.number);
    if input.team_id.is_some() {
        ensure_team(&state.pool, team_id).await?;
    }
    if team_id != current.team_id || number != current.number {
        ensure_number_free(&state.pool, team_id, number, Some(id)).await?;
    }

    let player = PlayerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Player", id))?;
    Ok(ApiResponse::ok("Player updated successfully", player))
}

/// DELETE /api/v1/players/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<()>> {
    if !PlayerRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found("Player", id));
    }
    tracing::info!(player_id = id, "Player deleted");
    Ok(ApiResponse::message("Player deleted successfully"))
}

/// POST /api/v1/players/{id}/restore
pub async fn restore(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<ApiResponse<()>> {
    if !PlayerRepo::restore(&state.pool, id).await? {
        return Err(AppError::not_found("Player", id));
    }
    Ok(ApiResponse::message("Player restored successfully"))
}

//! Match result recording and report generation.
//!
//! [`create_result`] validates a submission against stored matches and
//! rosters before anything is written; the first failing check wins and the
//! store is left untouched. [`generate_report`] reads one consistent snapshot
//! and folds it with [`league_core::report::build_report`].

use league_core::attribution::{check_goal, Scorer};
use league_core::error::CoreError;
use league_core::report::{build_report, ReportRow, WinCountMode};
use league_db::models::match_result::{CreateMatchResult, MatchResultWithGoals};
use league_db::repositories::{MatchRepo, MatchResultRepo, PlayerRepo};
use league_db::DbPool;

use crate::error::{AppError, AppResult};

/// Record a match result and its goals.
///
/// Checks, in order:
/// 1. the match exists,
/// 2. the match has no result yet,
/// 3. every goal's player exists and plays for the credited team.
///
/// Only then are the result and goals inserted, in one transaction. A
/// concurrent submission for the same match that slips past check 2 is
/// stopped by the unique index and surfaces as a conflict.
pub async fn create_result(
    pool: &DbPool,
    input: &CreateMatchResult,
) -> AppResult<MatchResultWithGoals> {
    MatchRepo::find_by_id(pool, input.match_id)
        .await?
        .ok_or(AppError::not_found("Match", input.match_id))?;

    if let Some(existing) = MatchResultRepo::find_by_match_id(pool, input.match_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Match result for match ID {} already exists (result ID {})",
            input.match_id, existing.id
        ))));
    }

    for goal in &input.goals {
        let scorer = PlayerRepo::find_by_id(pool, goal.player_id)
            .await?
            .map(|p| Scorer {
                player_id: p.id,
                name: p.name,
                team_id: p.team_id,
            });
        check_goal(goal.player_id, goal.team_id, scorer.as_ref()).inspect_err(|e| {
            tracing::debug!(match_id = input.match_id, error = %e, "Goal rejected");
        })?;
    }

    let created = MatchResultRepo::create_with_goals(pool, input).await?;

    tracing::info!(
        match_id = created.result.match_id,
        result_id = created.result.id,
        goals = created.goals.len(),
        "Match result created",
    );

    Ok(created)
}

/// Build the results report from the current state of the store.
pub async fn generate_report(pool: &DbPool, mode: WinCountMode) -> AppResult<Vec<ReportRow>> {
    let sources = MatchResultRepo::list_report_sources(pool).await?;
    let rows = build_report(sources, mode);
    tracing::debug!(rows = rows.len(), ?mode, "Report generated");
    Ok(rows)
}

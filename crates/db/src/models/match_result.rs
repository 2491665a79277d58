//! Match result and goal models and DTOs.
//!
//! A result is recorded once per match and owns its goals: both are written
//! in the same transaction and goals are never created on their own.

use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `match_results` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MatchResult {
    pub id: DbId,
    pub match_id: DbId,
    pub home_score: i32,
    pub away_score: i32,
    /// "Home Menang", "Away Menang", "Draw", or any other caller-supplied label.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A goal joined with its scorer's name.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GoalDetail {
    pub id: DbId,
    #[serde(skip)]
    pub match_result_id: DbId,
    pub player_id: DbId,
    pub player_name: String,
    pub team_id: DbId,
    pub minute: i32,
}

/// A match result together with its goals, in goal order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResultWithGoals {
    #[serde(flatten)]
    pub result: MatchResult,
    pub goals: Vec<GoalDetail>,
}

/// One goal in a create-result request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoal {
    pub player_id: DbId,
    /// Team credited with the goal; must be the scorer's own team.
    pub team_id: DbId,
    pub minute: i32,
}

/// DTO for recording the result of a match.
///
/// Scores and status are taken as given; they are not derived from or checked
/// against the goal list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMatchResult {
    pub match_id: DbId,
    #[serde(default)]
    pub home_score: i32,
    #[serde(default)]
    pub away_score: i32,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub status: String,
    #[serde(default)]
    pub goals: Vec<CreateGoal>,
}

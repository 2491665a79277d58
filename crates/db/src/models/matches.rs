//! Match (fixture) entity model and DTOs.

use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A match row from the `matches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Match {
    pub id: DbId,
    /// Kept as text; expected `YYYY-MM-DD`.
    pub date: String,
    /// Kept as text; expected `HH:MM`.
    pub time: String,
    pub home_team_id: DbId,
    pub away_team_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Id and display name of a team taking part in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: DbId,
    pub name: String,
}

/// A match with both teams resolved, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct MatchWithTeams {
    pub id: DbId,
    pub date: String,
    pub time: String,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
}

/// Flat join row backing [`MatchWithTeams`].
#[derive(Debug, Clone, FromRow)]
pub struct MatchWithTeamsRow {
    pub id: DbId,
    pub date: String,
    pub time: String,
    pub home_team_id: DbId,
    pub home_team_name: String,
    pub away_team_id: DbId,
    pub away_team_name: String,
}

impl From<MatchWithTeamsRow> for MatchWithTeams {
    fn from(row: MatchWithTeamsRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            time: row.time,
            home_team: TeamRef {
                id: row.home_team_id,
                name: row.home_team_name,
            },
            away_team: TeamRef {
                id: row.away_team_id,
                name: row.away_team_name,
            },
        }
    }
}

/// DTO for scheduling a new match.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMatch {
    #[validate(length(min = 1, max = 20))]
    pub date: String,
    #[validate(length(min = 1, max = 10))]
    pub time: String,
    pub home_team_id: DbId,
    pub away_team_id: DbId,
}

/// DTO for rescheduling a match. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMatch {
    #[validate(length(min = 1, max = 20))]
    pub date: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub time: Option<String>,
    pub home_team_id: Option<DbId>,
    pub away_team_id: Option<DbId>,
}

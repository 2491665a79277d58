//! Team entity model and DTOs.

use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A team row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub name: String,
    /// Path or URL of the team logo, if one has been set.
    pub logo: Option<String>,
    pub year_founded: i32,
    pub address: Option<String>,
    pub city: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new team.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeam {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub year_founded: i32,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
}

/// DTO for updating an existing team. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTeam {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub year_founded: Option<i32>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
}

/// DTO for pointing a team at a stored logo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetTeamLogo {
    #[validate(length(min = 1, max = 255))]
    pub logo: String,
}

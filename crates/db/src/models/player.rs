//! Player entity model and DTOs.

use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A player row from the `players` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub height: f64,
    pub weight: f64,
    /// Free text, e.g. "Penyerang", "Gelandang".
    pub position: String,
    /// Shirt number, unique among active players of the same team.
    pub number: i32,
    pub team_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new player.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlayer {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub height: f64,
    #[validate(range(min = 0.0))]
    pub weight: f64,
    #[validate(length(min = 1, max = 50))]
    pub position: String,
    #[validate(range(min = 0))]
    pub number: i32,
    pub team_id: DbId,
}

/// DTO for updating an existing player. All fields are optional; `Some(0)`
/// is a real value, not "unchanged".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlayer {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[validate(length(min = 1, max = 50))]
    pub position: Option<String>,
    #[validate(range(min = 0))]
    pub number: Option<i32>,
    /// Moves the player to another team.
    pub team_id: Option<DbId>,
}

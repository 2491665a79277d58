use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A goal credited to a team its scorer does not play for.
    #[error("Player {player_name} (ID {player_id}) does not belong to team {team_id}")]
    InvalidAttribution {
        player_id: DbId,
        player_name: String,
        team_id: DbId,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

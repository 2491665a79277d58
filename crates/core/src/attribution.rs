//! Goal attribution checks for match result creation.
//!
//! A goal names both its scorer and the team it is credited to. The credited
//! team must be the team the scorer currently plays for.

use crate::error::CoreError;
use crate::types::DbId;

/// The roster facts needed to check a goal: who the player is and which team
/// they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorer {
    pub player_id: DbId,
    pub name: String,
    pub team_id: DbId,
}

/// Check one goal against the looked-up scorer.
///
/// `scorer` is `None` when the player lookup found nothing, which yields
/// `NotFound`. A team mismatch yields `InvalidAttribution`.
pub fn check_goal(
    player_id: DbId,
    credited_team_id: DbId,
    scorer: Option<&Scorer>,
) -> Result<(), CoreError> {
    let scorer = scorer.ok_or(CoreError::NotFound {
        entity: "Player",
        id: player_id,
    })?;

    if scorer.team_id != credited_team_id {
        return Err(CoreError::InvalidAttribution {
            player_id: scorer.player_id,
            player_name: scorer.name.clone(),
            team_id: credited_team_id,
        });
    }
    Ok(())
}

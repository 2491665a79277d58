//! Match result status labels.
//!
//! The status is a free-form label supplied by the caller when a result is
//! recorded. Three labels carry meaning for the report; anything else is
//! stored as-is and treated as unrecognized.

use serde::Serialize;

/// The home side won.
pub const STATUS_HOME_WIN: &str = "Home Menang";

/// The away side won.
pub const STATUS_AWAY_WIN: &str = "Away Menang";

/// Neither side won.
pub const STATUS_DRAW: &str = "Draw";

/// Interpretation of a stored status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
    Unrecognized,
}

impl MatchOutcome {
    /// Classify a status label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            STATUS_HOME_WIN => Self::HomeWin,
            STATUS_AWAY_WIN => Self::AwayWin,
            STATUS_DRAW => Self::Draw,
            _ => Self::Unrecognized,
        }
    }

    pub fn is_home_win(self) -> bool {
        self == Self::HomeWin
    }

    pub fn is_away_win(self) -> bool {
        self == Self::AwayWin
    }
}

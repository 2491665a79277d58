//! Match results report.
//!
//! Folds every recorded result, together with its fixture context and the
//! names of its goal scorers, into one row per result: top scorers for that
//! match plus win counters. Rows come back ordered by date then kick-off time.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use crate::match_status::MatchOutcome;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One recorded result with everything the report needs, as loaded by the
/// repository layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSource {
    pub result_id: DbId,
    pub match_id: DbId,
    /// Fixture date as stored (expected `YYYY-MM-DD`).
    pub date: String,
    /// Fixture kick-off time as stored (expected `HH:MM`).
    pub time: String,
    pub home_team_id: DbId,
    pub away_team_id: DbId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub status: String,
    /// Scorer name for each goal, in goal order.
    pub scorers: Vec<String>,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub match_id: DbId,
    pub date: String,
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub status: String,
    pub top_scorers: Vec<String>,
    pub home_total_wins: u32,
    pub away_total_wins: u32,
}

/// How the win counters on each row are keyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinCountMode {
    /// Counters keyed by the row's own match id. Each row reports at most one
    /// win, for the side that won that match.
    #[default]
    PerMatch,
    /// Running totals keyed by team id, accumulated in report order up to and
    /// including the current row.
    PerTeam,
}

impl FromStr for WinCountMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "per_match" => Ok(Self::PerMatch),
            "per_team" => Ok(Self::PerTeam),
            other => Err(format!(
                "Unknown win count mode '{other}' (expected per_match or per_team)"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Folding
// ---------------------------------------------------------------------------

/// Names of every player tied for the most goals in one match.
///
/// Goals are tallied by scorer name. Names are returned in order of their
/// first goal. No goals means no top scorers.
pub fn top_scorers(scorers: &[String]) -> Vec<String> {
    let mut tally: Vec<(&str, u32)> = Vec::new();
    for name in scorers {
        match tally.iter_mut().find(|(n, _)| *n == name.as_str()) {
            Some((_, count)) => *count += 1,
            None => tally.push((name.as_str(), 1)),
        }
    }

    let Some(max) = tally.iter().map(|&(_, count)| count).max() else {
        return Vec::new();
    };

    tally
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Build the full report from loaded results.
///
/// Sources are ordered by `date` then `time` using plain string comparison
/// (stable for equal keys) before win counters are accumulated.
pub fn build_report(mut sources: Vec<ReportSource>, mode: WinCountMode) -> Vec<ReportRow> {
    sources.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));

    let mut tally = WinTally::new(mode);

    sources
        .into_iter()
        .map(|source| {
            let outcome = MatchOutcome::from_label(&source.status);
            let (home_total_wins, away_total_wins) = tally.record(&source, outcome);
            ReportRow {
                top_scorers: top_scorers(&source.scorers),
                match_id: source.match_id,
                date: source.date,
                time: source.time,
                home_team: source.home_team,
                away_team: source.away_team,
                home_score: source.home_score,
                away_score: source.away_score,
                status: source.status,
                home_total_wins,
                away_total_wins,
            }
        })
        .collect()
}

/// Win counters for the rows folded so far.
struct WinTally {
    mode: WinCountMode,
    /// `(home wins, away wins)` per match id.
    by_match: HashMap<DbId, (u32, u32)>,
    /// Wins per team id.
    by_team: HashMap<DbId, u32>,
}

impl WinTally {
    fn new(mode: WinCountMode) -> Self {
        Self {
            mode,
            by_match: HashMap::new(),
            by_team: HashMap::new(),
        }
    }

    /// Count the outcome of `source` and return the row's `(home, away)`
    /// totals.
    fn record(&mut self, source: &ReportSource, outcome: MatchOutcome) -> (u32, u32) {
        match self.mode {
            WinCountMode::PerMatch => {
                let entry = self.by_match.entry(source.match_id).or_default();
                if outcome.is_home_win() {
                    entry.0 += 1;
                }
                if outcome.is_away_win() {
                    entry.1 += 1;
                }
                *entry
            }
            WinCountMode::PerTeam => {
                if outcome.is_home_win() {
                    *self.by_team.entry(source.home_team_id).or_default() += 1;
                }
                if outcome.is_away_win() {
                    *self.by_team.entry(source.away_team_id).or_default() += 1;
                }
                let wins = |team_id| self.by_team.get(&team_id).copied().unwrap_or(0);
                (wins(source.home_team_id), wins(source.away_team_id))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

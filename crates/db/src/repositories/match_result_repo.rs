//! Repository for the `match_results` and `goals` tables.
//!
//! Goals are only ever written together with their result, so this repo owns
//! both tables.

use std::collections::HashMap;

use league_core::report::ReportSource;
use league_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::match_result::{
    CreateMatchResult, GoalDetail, MatchResult, MatchResultWithGoals,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, match_id, home_score, away_score, status, created_at, updated_at";

/// Goal columns with the scorer's name resolved. A scorer whose player row is
/// gone reads as "Unknown".
const GOAL_DETAIL_SELECT: &str = "SELECT g.id, g.match_result_id, g.player_id,
            COALESCE(p.name, 'Unknown') AS player_name, g.team_id, g.minute
     FROM goals g
     LEFT JOIN players p ON p.id = g.player_id";

/// One result joined with its match and both team names.
#[derive(Debug, FromRow)]
struct ReportSourceRow {
    result_id: DbId,
    match_id: DbId,
    date: String,
    time: String,
    home_team_id: DbId,
    away_team_id: DbId,
    home_team: String,
    away_team: String,
    home_score: i32,
    away_score: i32,
    status: String,
}

/// Provides persistence for match results and their goals.
pub struct MatchResultRepo;

impl MatchResultRepo {
    /// Insert a result and all of its goals in one transaction.
    ///
    /// Goals are inserted in request order. Either everything is written or
    /// nothing is.
    pub async fn create_with_goals(
        pool: &PgPool,
        input: &CreateMatchResult,
    ) -> Result<MatchResultWithGoals, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO match_results (match_id, home_score, away_score, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, MatchResult>(&query)
            .bind(input.match_id)
            .bind(input.home_score)
            .bind(input.away_score)
            .bind(&input.status)
            .fetch_one(&mut *tx)
            .await?;

        for goal in &input.goals {
            sqlx::query(
                "INSERT INTO goals (match_result_id, player_id, team_id, minute)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(result.id)
            .bind(goal.player_id)
            .bind(goal.team_id)
            .bind(goal.minute)
            .execute(&mut *tx)
            .await?;
        }

        let query = format!(
            "{GOAL_DETAIL_SELECT}
             WHERE g.match_result_id = $1 AND g.deleted_at IS NULL
             ORDER BY g.id"
        );
        let goals = sqlx::query_as::<_, GoalDetail>(&query)
            .bind(result.id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            result_id = result.id,
            match_id = result.match_id,
            goal_count = goals.len(),
            "Match result stored",
        );

        Ok(MatchResultWithGoals { result, goals })
    }

    /// Find the active result recorded for a match, if any.
    pub async fn find_by_match_id(
        pool: &PgPool,
        match_id: DbId,
    ) -> Result<Option<MatchResult>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM match_results WHERE match_id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, MatchResult>(&query)
            .bind(match_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a result by ID together with its goals.
    pub async fn find_by_id_with_goals(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MatchResultWithGoals>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM match_results WHERE id = $1 AND deleted_at IS NULL");
        let Some(result) = sqlx::query_as::<_, MatchResult>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "{GOAL_DETAIL_SELECT}
             WHERE g.match_result_id = $1 AND g.deleted_at IS NULL
             ORDER BY g.id"
        );
        let goals = sqlx::query_as::<_, GoalDetail>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(MatchResultWithGoals { result, goals }))
    }

    /// List all results with their goals, ordered by result ID.
    pub async fn list_with_goals(pool: &PgPool) -> Result<Vec<MatchResultWithGoals>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM match_results WHERE deleted_at IS NULL ORDER BY id");
        let results = sqlx::query_as::<_, MatchResult>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = results.iter().map(|r| r.id).collect();
        let query = format!(
            "{GOAL_DETAIL_SELECT}
             WHERE g.match_result_id = ANY($1) AND g.deleted_at IS NULL
             ORDER BY g.id"
        );
        let goals = sqlx::query_as::<_, GoalDetail>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_result: HashMap<DbId, Vec<GoalDetail>> = HashMap::new();
        for goal in goals {
            by_result.entry(goal.match_result_id).or_default().push(goal);
        }

        Ok(results
            .into_iter()
            .map(|result| {
                let goals = by_result.remove(&result.id).unwrap_or_default();
                MatchResultWithGoals { result, goals }
            })
            .collect())
    }

    /// Load everything the report needs from one consistent snapshot.
    ///
    /// Each source carries its scorers' names in goal order, one entry per
    /// goal. Sources come back in result ID order; sorting is the caller's job.
    pub async fn list_report_sources(pool: &PgPool) -> Result<Vec<ReportSource>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, ReportSourceRow>(
            "SELECT mr.id AS result_id, m.id AS match_id, m.date, m.time,
                    m.home_team_id, m.away_team_id,
                    ht.name AS home_team, awt.name AS away_team,
                    mr.home_score, mr.away_score, mr.status
             FROM match_results mr
             JOIN matches m ON m.id = mr.match_id
             JOIN teams ht ON ht.id = m.home_team_id
             JOIN teams awt ON awt.id = m.away_team_id
             WHERE mr.deleted_at IS NULL
             ORDER BY mr.id",
        )
        .fetch_all(&mut *tx)
        .await?;

        let query = format!(
            "{GOAL_DETAIL_SELECT}
             WHERE g.deleted_at IS NULL
             ORDER BY g.id"
        );
        let goals = sqlx::query_as::<_, GoalDetail>(&query)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let mut scorers: HashMap<DbId, Vec<String>> = HashMap::new();
        for goal in goals {
            scorers
                .entry(goal.match_result_id)
                .or_default()
                .push(goal.player_name);
        }

        Ok(rows
            .into_iter()
            .map(|row| ReportSource {
                scorers: scorers.remove(&row.result_id).unwrap_or_default(),
                result_id: row.result_id,
                match_id: row.match_id,
                date: row.date,
                time: row.time,
                home_team_id: row.home_team_id,
                away_team_id: row.away_team_id,
                home_team: row.home_team,
                away_team: row.away_team,
                home_score: row.home_score,
                away_score: row.away_score,
                status: row.status,
            })
            .collect())
    }

    /// Number of active results.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM match_results WHERE deleted_at IS NULL")
            .fetch_one(pool)
            .await
    }
}

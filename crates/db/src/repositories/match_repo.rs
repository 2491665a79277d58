//! Repository for the `matches` table.

use league_core::types::DbId;
use sqlx::PgPool;

use crate::models::matches::{CreateMatch, Match, MatchWithTeams, MatchWithTeamsRow, UpdateMatch};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, date, time, home_team_id, away_team_id, created_at, updated_at";

/// Select list joining both teams' names onto a match (`m`, `ht`, `at`).
const WITH_TEAMS: &str = "SELECT m.id, m.date, m.time,
            m.home_team_id, ht.name AS home_team_name,
            m.away_team_id, awt.name AS away_team_name
     FROM matches m
     JOIN teams ht ON ht.id = m.home_team_id
     JOIN teams awt ON awt.id = m.away_team_id";

/// Provides CRUD operations for matches.
pub struct MatchRepo;

impl MatchRepo {
    /// Insert a new match, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMatch) -> Result<Match, sqlx::Error> {
        let query = format!(
            "INSERT INTO matches (date, time, home_team_id, away_team_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(&input.date)
            .bind(&input.time)
            .bind(input.home_team_id)
            .bind(input.away_team_id)
            .fetch_one(pool)
            .await
    }

    /// Find a match by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Match>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM matches WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Match>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a match by ID with both teams resolved. Excludes soft-deleted rows.
    pub async fn find_with_teams(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MatchWithTeams>, sqlx::Error> {
        let query = format!("{WITH_TEAMS} WHERE m.id = $1 AND m.deleted_at IS NULL");
        let row = sqlx::query_as::<_, MatchWithTeamsRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(MatchWithTeams::from))
    }

    /// List all matches with teams resolved, in schedule order.
    pub async fn list_with_teams(pool: &PgPool) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        let query = format!("{WITH_TEAMS} WHERE m.deleted_at IS NULL ORDER BY m.date, m.time, m.id");
        let rows = sqlx::query_as::<_, MatchWithTeamsRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(MatchWithTeams::from).collect())
    }

    /// Find an active match occupying the given schedule slot, ignoring
    /// `exclude_id` (the match being updated).
    pub async fn find_by_schedule(
        pool: &PgPool,
        date: &str,
        time: &str,
        home_team_id: DbId,
        away_team_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Match>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matches
             WHERE date = $1 AND time = $2 AND home_team_id = $3 AND away_team_id = $4
               AND deleted_at IS NULL
               AND ($5::BIGINT IS NULL OR id <> $5)
             LIMIT 1"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(date)
            .bind(time)
            .bind(home_team_id)
            .bind(away_team_id)
            .bind(exclude_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a match. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMatch,
    ) -> Result<Option<Match>, sqlx::Error> {
        let query = format!(
            "UPDATE matches SET
                date = COALESCE($2, date),
                time = COALESCE($3, time),
                home_team_id = COALESCE($4, home_team_id),
                away_team_id = COALESCE($5, away_team_id)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(id)
            .bind(&input.date)
            .bind(&input.time)
            .bind(input.home_team_id)
            .bind(input.away_team_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a match by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE matches SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of active matches.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM matches WHERE deleted_at IS NULL")
            .fetch_one(pool)
            .await
    }
}

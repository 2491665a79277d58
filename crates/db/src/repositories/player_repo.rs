//! Repository for the `players` table.

use league_core::types::DbId;
use sqlx::PgPool;

use crate::models::player::{CreatePlayer, Player, UpdatePlayer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, height, weight, position, number, team_id, created_at, updated_at";

/// Provides CRUD operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a new player, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (name, height, weight, position, number, team_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&input.name)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.position)
            .bind(input.number)
            .bind(input.team_id)
            .fetch_one(pool)
            .await
    }

    /// Find a player by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM players WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all players in id order. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE deleted_at IS NULL ORDER BY id");
        sqlx::query_as::<_, Player>(&query).fetch_all(pool).await
    }

    /// List the active players of one team, ordered by shirt number.
    pub async fn list_by_team(pool: &PgPool, team_id: DbId) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM players
             WHERE team_id = $1 AND deleted_at IS NULL
             ORDER BY number, id"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await
    }

    /// Whether an active player on `team_id` other than `exclude_id` already
    /// wears `number`.
    pub async fn number_taken(
        pool: &PgPool,
        team_id: DbId,
        number: i32,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM players
                WHERE team_id = $1 AND number = $2 AND deleted_at IS NULL
                  AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(team_id)
        .bind(number)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update a player. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlayer,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET
                name = COALESCE($2, name),
                height = COALESCE($3, height),
                weight = COALESCE($4, weight),
                position = COALESCE($5, position),
                number = COALESCE($6, number),
                team_id = COALESCE($7, team_id)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.position)
            .bind(input.number)
            .bind(input.team_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a player by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE players SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted player. Returns `true` if a row was restored.
    ///
    /// Fails with a unique violation on `uq_players_team_number` if the shirt
    /// number was taken while the player was deleted.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE players SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of active players.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE deleted_at IS NULL")
            .fetch_one(pool)
            .await
    }
}

//! Integration tests for soft-delete and restore behaviour.
//!
//! - Soft-deleted rows are hidden from `find_by_id` and list queries
//! - Restoring makes them visible again
//! - Soft-delete is idempotent (second call returns `false`)

use sqlx::PgPool;
use league_db::models::matches::CreateMatch;
use league_db::models::player::CreatePlayer;
use league_db::models::team::CreateTeam;
use league_db::repositories::{MatchRepo, PlayerRepo, TeamRepo};

fn new_team(name: &str) -> CreateTeam {
    CreateTeam {
        name: name.to_string(),
        year_founded: 2005,
        address: None,
        city: None,
    }
}

fn new_player(team_id: i64, number: i32) -> CreatePlayer {
    CreatePlayer {
        name: format!("Player {number}"),
        height: 180.0,
        weight: 75.0,
        position: "Gelandang".to_string(),
        number,
        team_id,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_team(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Hidden FC")).await.unwrap();

    assert!(TeamRepo::soft_delete(&pool, team.id).await.unwrap());
    assert!(TeamRepo::find_by_id(&pool, team.id).await.unwrap().is_none());
    assert!(TeamRepo::list(&pool).await.unwrap().is_empty());
    assert_eq!(TeamRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Twice FC")).await.unwrap();

    assert!(TeamRepo::soft_delete(&pool, team.id).await.unwrap());
    assert!(!TeamRepo::soft_delete(&pool, team.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_restore_team(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Phoenix FC")).await.unwrap();
    TeamRepo::soft_delete(&pool, team.id).await.unwrap();

    assert!(TeamRepo::restore(&pool, team.id).await.unwrap());
    assert!(TeamRepo::find_by_id(&pool, team.id).await.unwrap().is_some());

    // Restoring an active row is a no-op.
    assert!(!TeamRepo::restore(&pool, team.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_and_restore_player(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("Garuda FC")).await.unwrap();
    let player = PlayerRepo::create(&pool, &new_player(team.id, 9)).await.unwrap();

    assert!(PlayerRepo::soft_delete(&pool, player.id).await.unwrap());
    assert!(PlayerRepo::find_by_id(&pool, player.id).await.unwrap().is_none());
    assert!(PlayerRepo::list_by_team(&pool, team.id).await.unwrap().is_empty());

    assert!(PlayerRepo::restore(&pool, player.id).await.unwrap());
    assert!(PlayerRepo::find_by_id(&pool, player.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_match(pool: PgPool) {
    let home = TeamRepo::create(&pool, &new_team("Home FC")).await.unwrap();
    let away = TeamRepo::create(&pool, &new_team("Away FC")).await.unwrap();
    let input = CreateMatch {
        date: "2025-10-20".to_string(),
        time: "15:00".to_string(),
        home_team_id: home.id,
        away_team_id: away.id,
    };
    let m = MatchRepo::create(&pool, &input).await.unwrap();

    assert!(MatchRepo::soft_delete(&pool, m.id).await.unwrap());
    assert!(MatchRepo::find_by_id(&pool, m.id).await.unwrap().is_none());
    assert!(MatchRepo::find_with_teams(&pool, m.id).await.unwrap().is_none());
    assert!(!MatchRepo::soft_delete(&pool, m.id).await.unwrap());

    // The slot is free again once the old fixture is gone.
    assert!(MatchRepo::create(&pool, &input).await.is_ok());
}

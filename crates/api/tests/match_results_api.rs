//! HTTP-level tests for recording match results and the results report.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, create_match, create_player, create_team, get, post_json_auth};
use league_core::report::WinCountMode;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

struct League {
    garuda: i64,
    pahlawan: i64,
    rizky: i64,
    dimas: i64,
    budi: i64,
    ahmad: i64,
}

async fn league(pool: &PgPool) -> League {
    let garuda = create_team(pool, "Garuda FC").await;
    let pahlawan = create_team(pool, "Pahlawan FC").await;
    League {
        rizky: create_player(pool, garuda, "Rizky Hadi", 9).await,
        dimas: create_player(pool, garuda, "Dimas Putra", 10).await,
        budi: create_player(pool, pahlawan, "Budi Santoso", 5).await,
        ahmad: create_player(pool, pahlawan, "Ahmad Fadli", 11).await,
        garuda,
        pahlawan,
    }
}

async fn post_result(pool: &PgPool, body: serde_json::Value) -> axum::response::Response {
    let token = admin_token(pool).await;
    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/match_results",
        body,
        &token,
    )
    .await
}

async fn goal_rows(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM goals")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// CreateResult
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_fetch_round_trip(pool: PgPool) {
    let l = league(&pool).await;
    let match_id = create_match(&pool, l.garuda, l.pahlawan, "2025-10-20", "15:00").await;

    let response = post_result(
        &pool,
        serde_json::json!({
            "match_id": match_id,
            "home_score": 2,
            "away_score": 1,
            "status": "Home Menang",
            "goals": [
                {"player_id": l.rizky, "team_id": l.garuda, "minute": 15},
                {"player_id": l.dimas, "team_id": l.garuda, "minute": 60},
                {"player_id": l.budi, "team_id": l.pahlawan, "minute": 75},
            ],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["match_id"], match_id);
    assert_eq!(created["home_score"], 2);
    assert_eq!(created["status"], "Home Menang");
    assert_eq!(created["goals"][0]["player_name"], "Rizky Hadi");
    assert_eq!(created["goals"][2]["minute"], 75);

    let id = created["id"].as_i64().unwrap();
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/match_results/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await["data"].clone();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_result_for_match_returns_409(pool: PgPool) {
    let l = league(&pool).await;
    let match_id = create_match(&pool, l.garuda, l.pahlawan, "2025-10-20", "15:00").await;
    let body = serde_json::json!({
        "match_id": match_id,
        "home_score": 0,
        "away_score": 0,
        "status": "Draw",
        "goals": [],
    });

    let response = post_result(&pool, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_result(&pool, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    let message = json["message"].as_str().unwrap();
    assert!(
        message.contains(&format!("match ID {match_id} already exists")),
        "unexpected message: {message}"
    );

    let response = get(common::build_test_app(pool), "/api/v1/match_results").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_misattributed_goal_rejected_without_side_effects(pool: PgPool) {
    let l = league(&pool).await;
    let match_id = create_match(&pool, l.garuda, l.pahlawan, "2025-10-20", "15:00").await;

    let response = post_result(
        &pool,
        serde_json::json!({
            "match_id": match_id,
            "home_score": 1,
            "away_score": 1,
            "status": "Draw",
            "goals": [
                {"player_id": l.rizky, "team_id": l.garuda, "minute": 10},
                {"player_id": l.budi, "team_id": l.garuda, "minute": 20},
            ],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        format!(
            "Player Budi Santoso (ID {}) does not belong to team {}",
            l.budi, l.garuda
        )
    );

    let response = get(common::build_test_app(pool.clone()), "/api/v1/match_results").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
    assert_eq!(goal_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_result_for_missing_match_returns_404(pool: PgPool) {
    let response = post_result(
        &pool,
        serde_json::json!({"match_id": 999999, "home_score": 0, "away_score": 0, "status": "Draw"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Match with ID 999999 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_goal_by_missing_player_returns_404(pool: PgPool) {
    let l = league(&pool).await;
    let match_id = create_match(&pool, l.garuda, l.pahlawan, "2025-10-20", "15:00").await;

    let response = post_result(
        &pool,
        serde_json::json!({
            "match_id": match_id,
            "home_score": 1,
            "away_score": 0,
            "status": "Home Menang",
            "goals": [{"player_id": 999999, "team_id": l.garuda, "minute": 5}],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(goal_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scores_are_not_checked_against_goals(pool: PgPool) {
    let l = league(&pool).await;
    let match_id = create_match(&pool, l.garuda, l.pahlawan, "2025-10-20", "15:00").await;

    let response = post_result(
        &pool,
        serde_json::json!({
            "match_id": match_id,
            "home_score": 5,
            "away_score": 0,
            "status": "Home Menang",
            "goals": [],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_result_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/match_results/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Three results entered out of chronological order:
///
/// | match | date/time        | status      | goals                    |
/// |-------|------------------|-------------|--------------------------|
/// | A     | 2025-10-22 09:00 | Away Menang | Ahmad                    |
/// | B     | 2025-10-20 18:00 | Draw        | none                     |
/// | C     | 2025-10-20 09:00 | Home Menang | Rizky, Dimas, Rizky, Budi|
async fn record_season(pool: &PgPool, l: &League) -> (i64, i64, i64) {
    let a = create_match(pool, l.garuda, l.pahlawan, "2025-10-22", "09:00").await;
    let b = create_match(pool, l.pahlawan, l.garuda, "2025-10-20", "18:00").await;
    let c = create_match(pool, l.garuda, l.pahlawan, "2025-10-20", "09:00").await;

    let results = [
        serde_json::json!({
            "match_id": a, "home_score": 0, "away_score": 1, "status": "Away Menang",
            "goals": [{"player_id": l.ahmad, "team_id": l.pahlawan, "minute": 88}],
        }),
        serde_json::json!({
            "match_id": b, "home_score": 0, "away_score": 0, "status": "Draw", "goals": [],
        }),
        serde_json::json!({
            "match_id": c, "home_score": 3, "away_score": 1, "status": "Home Menang",
            "goals": [
                {"player_id": l.rizky, "team_id": l.garuda, "minute": 3},
                {"player_id": l.dimas, "team_id": l.garuda, "minute": 30},
                {"player_id": l.rizky, "team_id": l.garuda, "minute": 55},
                {"player_id": l.budi, "team_id": l.pahlawan, "minute": 70},
            ],
        }),
    ];
    for body in results {
        let response = post_result(pool, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    (a, b, c)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_rows_sorted_with_top_scorers_and_wins(pool: PgPool) {
    let l = league(&pool).await;
    let (a, b, c) = record_season(&pool, &l).await;

    let response = get(common::build_test_app(pool), "/api/v1/match_results/report").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();

    let order: Vec<i64> = rows.iter().map(|r| r["match_id"].as_i64().unwrap()).collect();
    assert_eq!(order, vec![c, b, a]);

    // C: Rizky scored twice.
    assert_eq!(rows[0]["top_scorers"], serde_json::json!(["Rizky Hadi"]));
    assert_eq!(rows[0]["home_team"], "Garuda FC");
    assert_eq!(rows[0]["home_total_wins"], 1);
    assert_eq!(rows[0]["away_total_wins"], 0);

    // B: no goals, draw.
    assert_eq!(rows[1]["top_scorers"], serde_json::json!([]));
    assert_eq!(rows[1]["home_total_wins"], 0);
    assert_eq!(rows[1]["away_total_wins"], 0);

    // A: away win keyed by its own match.
    assert_eq!(rows[2]["top_scorers"], serde_json::json!(["Ahmad Fadli"]));
    assert_eq!(rows[2]["home_total_wins"], 0);
    assert_eq!(rows[2]["away_total_wins"], 1);
    assert_eq!(rows[2]["status"], "Away Menang");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_per_team_mode_accumulates(pool: PgPool) {
    let l = league(&pool).await;
    record_season(&pool, &l).await;

    let mut config = common::test_config();
    config.win_count_mode = WinCountMode::PerTeam;
    let app = common::build_app_with_config(pool, config);

    let response = get(app, "/api/v1/match_results/report").await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();

    // C: Garuda (home) wins its first.
    assert_eq!(rows[0]["home_total_wins"], 1);
    assert_eq!(rows[0]["away_total_wins"], 0);
    // B: Pahlawan home, Garuda away; draw changes nothing.
    assert_eq!(rows[1]["home_total_wins"], 0);
    assert_eq!(rows[1]["away_total_wins"], 1);
    // A: Garuda home, Pahlawan away wins.
    assert_eq!(rows[2]["home_total_wins"], 1);
    assert_eq!(rows[2]["away_total_wins"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_top_scorer_tie(pool: PgPool) {
    let l = league(&pool).await;
    let match_id = create_match(&pool, l.garuda, l.pahlawan, "2025-10-20", "15:00").await;
    let response = post_result(
        &pool,
        serde_json::json!({
            "match_id": match_id,
            "home_score": 1,
            "away_score": 1,
            "status": "Draw",
            "goals": [
                {"player_id": l.rizky, "team_id": l.garuda, "minute": 10},
                {"player_id": l.ahmad, "team_id": l.pahlawan, "minute": 80},
            ],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(common::build_test_app(pool), "/api/v1/match_results/report").await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"][0]["top_scorers"],
        serde_json::json!(["Rizky Hadi", "Ahmad Fadli"])
    );
}

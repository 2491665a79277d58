//! Startup seeding: the administrator account and optional demo data.
//!
//! Every step checks before it writes, so running it on every boot is safe.

use league_core::match_status::STATUS_HOME_WIN;
use league_core::types::DbId;
use league_db::models::match_result::{CreateGoal, CreateMatchResult};
use league_db::models::matches::CreateMatch;
use league_db::models::player::{CreatePlayer, Player};
use league_db::models::team::CreateTeam;
use league_db::models::user::CreateUser;
use league_db::repositories::{MatchRepo, MatchResultRepo, PlayerRepo, TeamRepo, UserRepo};
use league_db::DbPool;

use crate::aggregator;
use crate::auth::password::hash_password;
use crate::config::AdminCredentials;
use crate::error::AppError;

/// Errors raised while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error("Demo result rejected: {0}")]
    Rejected(#[from] AppError),
}

/// Create the administrator account unless one with that email exists.
///
/// Returns `true` when a new account was inserted.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminCredentials) -> Result<bool, SeedError> {
    if UserRepo::find_by_email(pool, &admin.email).await?.is_some() {
        return Ok(false);
    }

    let password_hash =
        hash_password(&admin.password).map_err(|e| SeedError::Password(e.to_string()))?;
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: "Admin".to_string(),
            email: admin.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "Admin user created");
    Ok(true)
}

/// Insert demo teams, players, matches and one result into empty tables.
///
/// Each table is seeded only while it is still empty. Teams are found by
/// name, so later steps also work against teams seeded on an earlier boot.
pub async fn seed_demo_data(pool: &DbPool) -> Result<(), SeedError> {
    if TeamRepo::count(pool).await? == 0 {
        for (name, year_founded, address, city) in DEMO_TEAMS {
            TeamRepo::create(
                pool,
                &CreateTeam {
                    name: name.to_string(),
                    year_founded: *year_founded,
                    address: Some(address.to_string()),
                    city: Some(city.to_string()),
                },
            )
            .await?;
        }
        tracing::info!(teams = DEMO_TEAMS.len(), "Seeded demo teams");
    }

    let (Some(garuda), Some(pahlawan)) = (
        TeamRepo::find_by_name(pool, DEMO_TEAMS[0].0).await?,
        TeamRepo::find_by_name(pool, DEMO_TEAMS[1].0).await?,
    ) else {
        tracing::warn!("Demo teams missing, skipping remaining demo data");
        return Ok(());
    };

    if PlayerRepo::count(pool).await? == 0 {
        for (name, height, weight, position, number, home_side) in DEMO_PLAYERS {
            let team_id = if *home_side { garuda.id } else { pahlawan.id };
            PlayerRepo::create(
                pool,
                &CreatePlayer {
                    name: name.to_string(),
                    height: *height,
                    weight: *weight,
                    position: position.to_string(),
                    number: *number,
                    team_id,
                },
            )
            .await?;
        }
        tracing::info!(players = DEMO_PLAYERS.len(), "Seeded demo players");
    }

    if MatchRepo::count(pool).await? == 0 {
        for (date, time, home_side) in DEMO_FIXTURES {
            let (home_team_id, away_team_id) = if *home_side {
                (garuda.id, pahlawan.id)
            } else {
                (pahlawan.id, garuda.id)
            };
            MatchRepo::create(
                pool,
                &CreateMatch {
                    date: date.to_string(),
                    time: time.to_string(),
                    home_team_id,
                    away_team_id,
                },
            )
            .await?;
        }
        tracing::info!(matches = DEMO_FIXTURES.len(), "Seeded demo matches");
    }

    if MatchResultRepo::count(pool).await? == 0 {
        seed_demo_result(pool, garuda.id, pahlawan.id).await?;
    }

    Ok(())
}

/// A 2-1 home win in the first demo fixture, with goals by two home players
/// and one away player. Recorded through the same checks as an API submission.
async fn seed_demo_result(pool: &DbPool, home_id: DbId, away_id: DbId) -> Result<(), SeedError> {
    let (date, time, _) = DEMO_FIXTURES[0];
    let Some(fixture) =
        MatchRepo::find_by_schedule(pool, date, time, home_id, away_id, None).await?
    else {
        tracing::warn!(date, time, "Demo fixture missing, skipping demo result");
        return Ok(());
    };

    let home = PlayerRepo::list_by_team(pool, home_id).await?;
    let away = PlayerRepo::list_by_team(pool, away_id).await?;
    let by_number = |roster: &[Player], number: i32| {
        roster.iter().find(|p| p.number == number).map(|p| p.id)
    };

    let (Some(rizky), Some(dimas), Some(budi)) = (
        by_number(&home, 9),
        by_number(&home, 10),
        by_number(&away, 5),
    ) else {
        tracing::warn!("Demo players missing, skipping demo result");
        return Ok(());
    };

    let input = CreateMatchResult {
        match_id: fixture.id,
        home_score: 2,
        away_score: 1,
        status: STATUS_HOME_WIN.to_string(),
        goals: vec![
            CreateGoal {
                player_id: rizky,
                team_id: home_id,
                minute: 15,
            },
            CreateGoal {
                player_id: dimas,
                team_id: home_id,
                minute: 60,
            },
            CreateGoal {
                player_id: budi,
                team_id: away_id,
                minute: 75,
            },
        ],
    };
    let created = aggregator::create_result(pool, &input).await?;
    tracing::info!(result_id = created.result.id, "Seeded demo match result");
    Ok(())
}

/// (name, year founded, address, city)
const DEMO_TEAMS: &[(&str, i32, &str, &str)] = &[
    ("Garuda FC", 1998, "Jl. Merdeka No. 1", "Jakarta"),
    ("Pahlawan FC", 2005, "Jl. Pahlawan No. 7", "Surabaya"),
];

/// (date, time, first demo team plays at home)
const DEMO_FIXTURES: &[(&str, &str, bool)] = &[
    ("2025-10-20", "15:00", true),
    ("2025-10-22", "18:30", false),
    ("2025-10-25", "20:00", true),
];

/// (name, height, weight, position, number, plays for the first demo team)
const DEMO_PLAYERS: &[(&str, f64, f64, &str, i32, bool)] = &[
    ("Rizky Hadi", 178.0, 72.0, "Penyerang", 9, true),
    ("Dimas Putra", 180.0, 75.0, "Gelandang", 10, true),
    ("Andri Saputra", 185.0, 80.0, "Penjaga Gawang", 1, true),
    ("Budi Santoso", 177.0, 70.0, "Bertahan", 5, false),
    ("Yoga Prasetyo", 174.0, 68.0, "Gelandang", 8, false),
    ("Ahmad Fadli", 182.0, 78.0, "Penyerang", 11, false),
];

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use league_core::report::WinCountMode;
use league_core::roles::ROLE_ADMIN;
use sqlx::PgPool;
use tower::ServiceExt;

use league_api::auth::jwt::{generate_access_token, JwtConfig};
use league_api::config::{AdminCredentials, ServerConfig};
use league_api::router::build_app_router;
use league_api::seed;
use league_api::state::AppState;
use league_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 60,
        },
        admin: AdminCredentials {
            email: "admin@xyz.com".to_string(),
            password: "admin123".to_string(),
        },
        seed_demo_data: false,
        win_count_mode: WinCountMode::PerMatch,
    }
}

/// Build the full application router, with production middleware, over the
/// given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid admin bearer token for the seeded admin account.
pub async fn admin_token(pool: &PgPool) -> String {
    let config = test_config();
    seed::ensure_admin(pool, &config.admin)
        .await
        .expect("admin seeding should succeed");
    let admin = UserRepo::find_by_email(pool, &config.admin.email)
        .await
        .expect("admin lookup should succeed")
        .expect("admin should exist after seeding");
    generate_access_token(admin.id, &admin.email, ROLE_ADMIN, &config.jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a team through the API and return its id.
pub async fn create_team(pool: &PgPool, name: &str) -> i64 {
    let token = admin_token(pool).await;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/teams",
        serde_json::json!({
            "name": name,
            "year_founded": 1998,
            "address": "Jl. Merdeka No. 1",
            "city": "Jakarta",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), 201, "team creation should succeed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a player through the API and return its id.
pub async fn create_player(pool: &PgPool, team_id: i64, name: &str, number: i32) -> i64 {
    let token = admin_token(pool).await;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/players",
        serde_json::json!({
            "name": name,
            "height": 178.0,
            "weight": 72.0,
            "position": "Penyerang",
            "number": number,
            "team_id": team_id,
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), 201, "player creation should succeed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a match through the API and return its id.
pub async fn create_match(pool: &PgPool, home: i64, away: i64, date: &str, time: &str) -> i64 {
    let token = admin_token(pool).await;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/matches",
        serde_json::json!({
            "date": date,
            "time": time,
            "home_team_id": home,
            "away_team_id": away,
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), 201, "match creation should succeed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

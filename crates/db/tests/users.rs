use assert_matches::assert_matches;
use sqlx::PgPool;
use league_db::models::user::{CreateUser, UserResponse};
use league_db::repositories::UserRepo;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Admin".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("admin@xyz.com")).await.unwrap();

    let by_id = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "admin@xyz.com");

    let by_email = UserRepo::find_by_email(&pool, "admin@xyz.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    assert!(UserRepo::find_by_email(&pool, "other@xyz.com")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("admin@xyz.com")).await.unwrap();

    let err = UserRepo::create(&pool, &new_user("admin@xyz.com"))
        .await
        .unwrap_err();
    assert_matches!(&err, sqlx::Error::Database(db) if db.constraint() == Some("uq_users_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_response_hides_hash(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("admin@xyz.com")).await.unwrap();
    let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "admin@xyz.com");
}

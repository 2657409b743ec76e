mod common;

use alias_shortener::domain::entities::AuthOutcome;
use alias_shortener::domain::repositories::UserRepository;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::SqliteUserRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_create_user_stores_hash_not_password() {
    let pool = common::test_pool().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()), common::test_credentials());

    let id = repo.create_user("alice", "pw").await.unwrap();
    assert!(id > 0);

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_ne!(stored, "pw");
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let repo = SqliteUserRepository::new(
        Arc::new(common::test_pool().await),
        common::test_credentials(),
    );

    repo.create_user("alice", "pw").await.unwrap();
    let result = repo.create_user("alice", "other").await;

    match result {
        Err(AppError::UsernameConflict { username }) => assert_eq!(username, "alice"),
        other => panic!("expected username conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_authenticate_user_correct_password() {
    let repo = SqliteUserRepository::new(
        Arc::new(common::test_pool().await),
        common::test_credentials(),
    );

    let id = repo.create_user("bob", "correct").await.unwrap();
    let outcome = repo.authenticate_user("bob", "correct").await.unwrap();

    assert_eq!(outcome, AuthOutcome::Authenticated(id));
}

#[tokio::test]
async fn test_authenticate_user_wrong_password() {
    let repo = SqliteUserRepository::new(
        Arc::new(common::test_pool().await),
        common::test_credentials(),
    );

    repo.create_user("bob", "correct").await.unwrap();
    let outcome = repo.authenticate_user("bob", "wrong").await.unwrap();

    assert_eq!(outcome, AuthOutcome::Rejected);
}

#[tokio::test]
async fn test_authenticate_user_unknown_username() {
    let repo = SqliteUserRepository::new(
        Arc::new(common::test_pool().await),
        common::test_credentials(),
    );

    let result = repo.authenticate_user("nobody", "pw").await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_authenticate_with_corrupt_hash_is_rejected() {
    let pool = common::test_pool().await;
    sqlx::query("INSERT INTO users (username, password_hash) VALUES ('mallory', 'not-a-hash')")
        .execute(&pool)
        .await
        .unwrap();
    let repo = SqliteUserRepository::new(Arc::new(pool), common::test_credentials());

    let outcome = repo.authenticate_user("mallory", "not-a-hash").await.unwrap();

    assert_eq!(outcome, AuthOutcome::Rejected);
}

#[tokio::test]
async fn test_find_by_username() {
    let repo = SqliteUserRepository::new(
        Arc::new(common::test_pool().await),
        common::test_credentials(),
    );

    let id = repo.create_user("carol", "pw").await.unwrap();

    let user = repo.find_by_username("carol").await.unwrap().unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.username, "carol");

    assert!(repo.find_by_username("dave").await.unwrap().is_none());
}

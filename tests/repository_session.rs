mod common;

use alias_shortener::domain::repositories::{SessionRepository, UserRepository};
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::{
    SqliteSessionRepository, SqliteUserRepository,
};
use std::sync::Arc;

#[tokio::test]
async fn test_create_and_find_session() {
    let pool = Arc::new(common::test_pool().await);
    let users = SqliteUserRepository::new(pool.clone(), common::test_credentials());
    let sessions = SqliteSessionRepository::new(pool);

    let user_id = users.create_user("alice", "pw").await.unwrap();
    let session_id = sessions
        .create_session(user_id, "AbCdEfGh12345678")
        .await
        .unwrap();

    let session = sessions
        .find_session("AbCdEfGh12345678")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(session.id, session_id);
    assert_eq!(session.user_id, user_id);
    assert_eq!(session.token, "AbCdEfGh12345678");
}

#[tokio::test]
async fn test_find_unknown_session() {
    let sessions = SqliteSessionRepository::new(Arc::new(common::test_pool().await));

    assert!(sessions.find_session("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_token_is_plain_store_error() {
    let pool = Arc::new(common::test_pool().await);
    let users = SqliteUserRepository::new(pool.clone(), common::test_credentials());
    let sessions = SqliteSessionRepository::new(pool);

    let user_id = users.create_user("alice", "pw").await.unwrap();
    sessions.create_session(user_id, "same-token").await.unwrap();

    let result = sessions.create_session(user_id, "same-token").await;

    assert!(matches!(result, Err(AppError::Store { .. })));
}

#[tokio::test]
async fn test_session_requires_existing_user() {
    let sessions = SqliteSessionRepository::new(Arc::new(common::test_pool().await));

    let result = sessions.create_session(999, "orphan-token").await;

    assert!(matches!(result, Err(AppError::Store { .. })));
}

#[tokio::test]
async fn test_user_may_hold_many_sessions() {
    let pool = Arc::new(common::test_pool().await);
    let users = SqliteUserRepository::new(pool.clone(), common::test_credentials());
    let sessions = SqliteSessionRepository::new(pool.clone());

    let user_id = users.create_user("alice", "pw").await.unwrap();
    sessions.create_session(user_id, "token-one").await.unwrap();
    sessions.create_session(user_id, "token-two").await.unwrap();

    assert_eq!(common::count_sessions(&pool).await, 2);
}

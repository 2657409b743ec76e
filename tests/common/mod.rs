#![allow(dead_code)]

use alias_shortener::infrastructure::persistence::{MIGRATOR, StoreOptions, store};
use alias_shortener::state::AppState;
use alias_shortener::utils::password::CredentialEngine;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const ALIAS_LENGTH: usize = 6;
pub const SESSION_TOKEN_LENGTH: usize = 16;

/// Fresh in-memory database with the schema applied.
///
/// A single connection that never expires, since every new in-memory
/// connection would see an empty database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

/// File-backed database opened the same way the server opens it.
pub async fn file_pool(path: &Path, max_connections: u32) -> SqlitePool {
    store::connect(&StoreOptions {
        database_url: format!("sqlite://{}", path.display()),
        max_connections,
        connect_timeout: Duration::from_secs(10),
    })
    .await
    .unwrap()
}

/// Cheap Argon2 parameters so tests stay fast.
pub fn test_credentials() -> CredentialEngine {
    CredentialEngine::with_params(4096, 1, 1).unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, test_credentials(), ALIAS_LENGTH, SESSION_TOKEN_LENGTH)
}

pub async fn insert_url(pool: &SqlitePool, target: &str, alias: &str) {
    sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
        .bind(target)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_sessions(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
        .fetch_one(pool)
        .await
        .unwrap()
}

//! SQLite implementation of the user repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{AuthOutcome, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;
use crate::utils::password::{CredentialEngine, HashedPassword};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: NaiveDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: HashedPassword::from_stored(row.password_hash),
            created_at: row.created_at.and_utc(),
        }
    }
}

/// SQLite repository for user accounts.
///
/// Holds the [`CredentialEngine`] so raw passwords are hashed before they
/// reach the database. Argon2 work runs on the blocking thread pool.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
    credentials: CredentialEngine,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool and hasher.
    pub fn new(pool: Arc<SqlitePool>, credentials: CredentialEngine) -> Self {
        Self { pool, credentials }
    }

    async fn hash_password(&self, password: &str) -> Result<HashedPassword, AppError> {
        let credentials = self.credentials.clone();
        let password = password.to_owned();

        run_blocking(move || credentials.hash(&password)).await?
    }

    async fn verify_password(&self, password: &str, hash: HashedPassword) -> Result<bool, AppError> {
        let credentials = self.credentials.clone();
        let password = password.to_owned();

        run_blocking(move || credentials.verify(&password, &hash)).await
    }
}

/// Runs Argon2 work on the blocking pool. A panicked or cancelled task is a
/// hashing failure, never a verdict on the password.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::hashing(format!("hashing task failed: {e}")))
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(&self, username: &str, password: &str) -> Result<i64, AppError> {
        let hash = self.hash_password(password).await?;

        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(hash.as_str())
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::username_conflict(username)
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, AppError> {
        let user = self.find_by_username(username).await?.ok_or_else(|| {
            AppError::not_found("User not found", json!({ "username": username }))
        })?;

        if self.verify_password(password, user.password_hash).await? {
            Ok(AuthOutcome::Authenticated(user.id))
        } else {
            Ok(AuthOutcome::Rejected)
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }
}

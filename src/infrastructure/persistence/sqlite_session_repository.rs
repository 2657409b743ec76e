//! SQLite implementation of the session repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct SessionRow {
    id: i64,
    user_id: i64,
    token: String,
    created_at: NaiveDateTime,
}

/// SQLite repository for login sessions.
pub struct SqliteSessionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn create_session(&self, user_id: i64, token: &str) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO sessions (user_id, token) VALUES (?, ?)")
            .bind(user_id)
            .bind(token)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_session(&self, token: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_id, token, created_at
            FROM sessions
            WHERE token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Session {
            id: r.id,
            user_id: r.user_id,
            token: r.token,
            created_at: r.created_at.and_utc(),
        }))
    }
}

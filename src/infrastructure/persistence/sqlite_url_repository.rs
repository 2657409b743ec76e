//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

#[derive(FromRow)]
struct UrlRow {
    id: i64,
    url: String,
    alias: String,
}

impl From<UrlRow> for UrlEntry {
    fn from(row: UrlRow) -> Self {
        UrlEntry::new(row.id, row.url, row.alias)
    }
}

/// SQLite repository for alias → URL entries.
///
/// Every call is a single statement against the pool; nothing is cached.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save_url(&self, target: &str, alias: &str) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(target)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::alias_conflict(alias)
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        let target: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        target.ok_or_else(|| AppError::not_found("URL not found", json!({ "alias": alias })))
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlEntry>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>("SELECT id, url, alias FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlEntry::from))
    }

    async fn delete_url(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

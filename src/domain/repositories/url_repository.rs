//! Repository trait for alias → URL storage.

use crate::domain::entities::UrlEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for URL entries.
///
/// Writes rely on the store's unique constraint on `alias`; implementations
/// must not pre-check existence before inserting.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new entry and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasConflict`] if `alias` is already taken.
    /// Returns [`AppError::Store`] on any other database error.
    async fn save_url(&self, target: &str, alias: &str) -> Result<i64, AppError>;

    /// Looks up the target for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this alias.
    /// Returns [`AppError::Store`] on database errors.
    async fn get_url(&self, alias: &str) -> Result<String, AppError>;

    /// Loads the full entry stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Deletes the entry for `alias`.
    ///
    /// Succeeds whether or not a row existed. Returns `true` if one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete_url(&self, alias: &str) -> Result<bool, AppError>;
}

//! Repository trait for login sessions.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for sessions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSessionRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Inserts a session row for `user_id` and returns its id.
    ///
    /// A token collision is not classified specially.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any database error, including a
    /// duplicate token or an unknown `user_id`.
    async fn create_session(&self, user_id: i64, token: &str) -> Result<i64, AppError>;

    /// Finds a session by its token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_session(&self, token: &str) -> Result<Option<Session>, AppError>;
}

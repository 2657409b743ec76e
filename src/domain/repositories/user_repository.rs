//! Repository trait for user accounts.

use crate::domain::entities::{AuthOutcome, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for user accounts.
///
/// Implementations own password hashing: callers hand over the raw password
/// and never see the hash.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Hashes `password` and inserts a new user, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UsernameConflict`] if the username is taken.
    /// Returns [`AppError::Hashing`] if the password cannot be hashed.
    /// Returns [`AppError::Store`] on any other database error.
    async fn create_user(&self, username: &str, password: &str) -> Result<i64, AppError>;

    /// Verifies `password` for `username`.
    ///
    /// # Returns
    ///
    /// - `Ok(AuthOutcome::Authenticated(id))` when the password matches
    /// - `Ok(AuthOutcome::Rejected)` when it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this username.
    /// Returns [`AppError::Hashing`] if verification could not run.
    /// Returns [`AppError::Store`] on database errors.
    async fn authenticate_user(&self, username: &str, password: &str)
    -> Result<AuthOutcome, AppError>;

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}

//! Account registration and login.

use std::sync::Arc;

use crate::domain::entities::AuthOutcome;
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Service for registering users and opening sessions.
///
/// Login failures never reveal whether the username or the password was
/// wrong: both surface as [`AppError::AuthFailed`].
pub struct AccountService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    token_generator: CodeGenerator,
}

impl<U: UserRepository, S: SessionRepository> AccountService<U, S> {
    /// Creates a new account service.
    ///
    /// `token_generator` must be a separate instance from the alias generator,
    /// configured with the session-token length.
    pub fn new(users: Arc<U>, sessions: Arc<S>, token_generator: CodeGenerator) -> Self {
        Self {
            users,
            sessions,
            token_generator,
        }
    }

    /// Registers a new user and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UsernameConflict`] if the username is taken.
    /// Returns [`AppError::Hashing`] or [`AppError::Store`] on internal failure.
    pub async fn register(&self, username: &str, password: &str) -> Result<i64, AppError> {
        match self.users.create_user(username, password).await {
            Ok(id) => {
                tracing::info!(user_id = id, username = %username, "user created");
                Ok(id)
            }
            Err(e @ AppError::UsernameConflict { .. }) => {
                tracing::info!(username = %username, "username already exists");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Authenticates `username` and opens a session, returning its token.
    ///
    /// No session row is written unless the password verified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthFailed`] for an unknown user or a wrong password.
    /// Returns [`AppError::Generation`] or [`AppError::Store`] on internal failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user_id = match self.users.authenticate_user(username, password).await {
            Ok(AuthOutcome::Authenticated(id)) => id,
            Ok(AuthOutcome::Rejected) | Err(AppError::NotFound { .. }) => {
                tracing::info!(username = %username, "login failed");
                return Err(AppError::AuthFailed);
            }
            Err(e) => return Err(e),
        };

        let token = self.token_generator.generate()?;
        self.sessions.create_session(user_id, &token).await?;

        tracing::info!(user_id, "session created");

        Ok(token)
    }
}

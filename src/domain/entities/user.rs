//! User account entity.

use chrono::{DateTime, Utc};

use crate::utils::password::HashedPassword;

/// A registered account.
///
/// Only the password hash is ever stored. Usernames are unique.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

/// Result of checking a username/password pair against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Password verified for the user with this id.
    Authenticated(i64),
    /// The user exists but the password did not match.
    Rejected,
}

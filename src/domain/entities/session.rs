//! Session entity issued on successful login.

use chrono::{DateTime, Utc};

/// An opaque login session.
///
/// Tokens are unique, fixed-length and random. Sessions have no expiry or
/// revocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

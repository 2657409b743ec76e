//! Repository trait definitions for the domain layer.
//!
//! Each trait is a narrow capability so that services depend only on what
//! they use, and can be tested against `mockall` fakes without a database.
//!
//! - [`UrlRepository`] - Alias → URL writes, lookups and deletes
//! - [`UserRepository`] - Account creation and credential checks
//! - [`SessionRepository`] - Session issuance and lookup
//!
//! SQLite implementations live in `crate::infrastructure::persistence`.

pub mod session_repository;
pub mod url_repository;
pub mod user_repository;

pub use session_repository::SessionRepository;
pub use url_repository::UrlRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! prepared statements against a shared [`sqlx::SqlitePool`].
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Alias → URL storage
//! - [`SqliteUserRepository`] - Accounts and credential checks
//! - [`SqliteSessionRepository`] - Session tokens
//!
//! [`store`] opens the pool and applies the embedded migrations.

pub mod sqlite_session_repository;
pub mod sqlite_url_repository;
pub mod sqlite_user_repository;
pub mod store;

pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
pub use sqlite_user_repository::SqliteUserRepository;
pub use store::{MIGRATOR, StoreOptions};

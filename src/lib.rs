//! # Alias Shortener
//!
//! Maps short aliases to long URLs and keeps minimal user accounts and login
//! sessions, all stored in a single SQLite file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Use-case services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and schema
//! - **API Layer** ([`api`]) - Thin HTTP handlers, DTOs and middleware
//! - **Utilities** ([`utils`]) - Alias/token generation and password hashing
//!
//! ## Guarantees
//!
//! - Alias and username uniqueness come from the store's unique constraints;
//!   concurrent writers of the same alias see exactly one winner.
//! - Passwords are stored only as salted Argon2id hashes.
//! - Session tokens are fixed-length strings from the OS CSPRNG.
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountService, UrlService};
    pub use crate::domain::entities::{AuthOutcome, Session, UrlEntry, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
    pub use crate::utils::password::CredentialEngine;
}

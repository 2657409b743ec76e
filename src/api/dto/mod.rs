//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON and `validator` for input checks.

pub mod account;
pub mod health;
pub mod save;

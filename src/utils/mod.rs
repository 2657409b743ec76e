//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random alias and session-token generation
//! - [`password`] - Password hashing and verification
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod password;

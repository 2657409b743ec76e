//! Core domain entities.
//!
//! - [`UrlEntry`] - An alias pointing at a target URL
//! - [`User`] - A registered account
//! - [`Session`] - A login session token bound to a user
//!
//! [`AuthOutcome`] is the tagged result of a credential check.

pub mod session;
pub mod url_entry;
pub mod user;

pub use session::Session;
pub use url_entry::UrlEntry;
pub use user::{AuthOutcome, User};

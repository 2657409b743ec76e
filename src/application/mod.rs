//! Application layer services implementing the use cases.
//!
//! Services consume repository traits and present a small facade to the
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Save, resolve and delete aliases
//! - [`services::account_service::AccountService`] - Register users and open sessions
//!
//! Neither service retries on conflict. A collision on a generated alias is
//! reported to the caller like any other alias conflict.

pub mod services;

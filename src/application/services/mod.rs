//! Use-case services composing generators, hashing and storage.

pub mod account_service;
pub mod url_service;

pub use account_service::AccountService;
pub use url_service::UrlService;

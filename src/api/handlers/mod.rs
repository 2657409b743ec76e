//! HTTP request handlers.
//!
//! Each handler decodes and validates its input, calls one service method,
//! and lets [`crate::error::AppError`] pick the status code.

pub mod delete;
pub mod health;
pub mod login;
pub mod redirect;
pub mod register;
pub mod save;

pub use delete::delete_handler;
pub use health::health_handler;
pub use login::login_handler;
pub use redirect::redirect_handler;
pub use register::register_handler;
pub use save::save_handler;

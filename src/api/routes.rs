//! API route configuration.

use crate::api::handlers::{
    delete_handler, health_handler, login_handler, redirect_handler, register_handler,
    save_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET    /health`    - Store reachability
/// - `POST   /save`      - Store a URL under an alias
/// - `POST   /register`  - Create an account
/// - `POST   /login`     - Open a session
/// - `GET    /{alias}`   - Redirect to the target URL
/// - `DELETE /{alias}`   - Delete an alias
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/save", post(save_handler))
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/{alias}", get(redirect_handler).delete(delete_handler))
}

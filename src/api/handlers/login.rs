//! Handler for login.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::account::{CredentialsRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Verifies credentials and issues a session token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Response
///
/// `200 OK` with `{ "token": "..." }`.
///
/// # Errors
///
/// - 400 if either field is empty
/// - 401 for an unknown user or wrong password (indistinguishable)
/// - 500 on store or entropy failure
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let token = state
        .account_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}

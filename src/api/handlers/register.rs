//! Handler for account registration.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::account::{CredentialsRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "s3cret" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "id": 1, "username": "alice" }`.
///
/// # Errors
///
/// - 400 if either field is empty
/// - 409 if the username is taken
/// - 500 on hashing or store failure
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let id = state
        .account_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id,
            username: payload.username,
        }),
    ))
}

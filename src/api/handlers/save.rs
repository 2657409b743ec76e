//! Handler for the save endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under an explicit or generated alias.
///
/// # Endpoint
///
/// `POST /save`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "promo" }
/// ```
///
/// `alias` may be omitted or empty.
///
/// # Response
///
/// `201 Created` with `{ "alias": "promo" }`.
///
/// # Errors
///
/// - 400 if `url` is not a valid URL
/// - 409 if the alias is already taken (generated aliases are not retried)
/// - 500 on store or entropy failure
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    payload.validate()?;

    let alias = state
        .url_service
        .save_url(&payload.url, payload.alias.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(SaveResponse { alias })))
}

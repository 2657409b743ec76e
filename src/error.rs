//! Crate-wide error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Repositories classify unique-constraint
//! violations into the specific conflict kinds; anything else coming out of
//! the store is passed through as [`AppError::Store`]. The HTTP boundary turns
//! each kind into a status code and a JSON error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload sent to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body rejected at the boundary.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Entity absent (unknown alias, unknown username).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("alias '{alias}' already exists")]
    AliasConflict { alias: String },

    #[error("username '{username}' already exists")]
    UsernameConflict { username: String },

    /// Credential mismatch. Deliberately does not say which half was wrong.
    #[error("authentication failed")]
    AuthFailed,

    #[error("store error: {message}")]
    Store { message: String },

    #[error("random generation failed: {message}")]
    Generation { message: String },

    #[error("password hashing failed: {message}")]
    Hashing { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn alias_conflict(alias: impl Into<String>) -> Self {
        Self::AliasConflict {
            alias: alias.into(),
        }
    }

    pub fn username_conflict(username: impl Into<String>) -> Self {
        Self::UsernameConflict {
            username: username.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }

    /// Returns true for the kinds that surface as "internal error".
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Store { .. } | Self::Generation { .. } | Self::Hashing { .. }
        )
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::AuthFailed => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AliasConflict { .. } | Self::UsernameConflict { .. } => StatusCode::CONFLICT,
            Self::Store { .. } | Self::Generation { .. } | Self::Hashing { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the client-facing payload. Internal kinds lose their message.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            Self::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            Self::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            Self::AliasConflict { alias } => ErrorInfo {
                code: "conflict",
                message: "Alias already exists".to_string(),
                details: json!({ "alias": alias }),
            },
            Self::UsernameConflict { username } => ErrorInfo {
                code: "conflict",
                message: "Username already exists".to_string(),
                details: json!({ "username": username }),
            },
            Self::AuthFailed => ErrorInfo {
                code: "unauthorized",
                message: "Authentication failed".to_string(),
                details: json!({}),
            },
            Self::Store { .. } | Self::Generation { .. } | Self::Hashing { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "request failed");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::store(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        Self::bad_request("Request validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("gone", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::alias_conflict("abc").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::username_conflict("alice").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::AuthFailed.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::store("disk full").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::generation("no entropy").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::hashing("no entropy").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_hide_message() {
        let info = AppError::store("UNIQUE constraint failed: sessions.token").to_error_info();

        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("sessions"));
    }

    #[test]
    fn test_conflict_info_carries_alias() {
        let info = AppError::alias_conflict("promo").to_error_info();

        assert_eq!(info.code, "conflict");
        assert_eq!(info.details["alias"], "promo");
    }

    #[test]
    fn test_auth_failed_is_generic() {
        let info = AppError::AuthFailed.to_error_info();

        assert_eq!(info.message, "Authentication failed");
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_sqlx_error_becomes_store() {
        let err: AppError = sqlx::Error::RowNotFound.into();

        assert!(matches!(err, AppError::Store { .. }));
        assert!(err.is_internal());
    }
}

//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Characters an explicit alias may contain: one URL path segment.
/// Empty is allowed and means "generate one".
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Paths served by fixed routes; an alias with one of these names could never redirect.
const RESERVED_ALIASES: &[&str] = &["health", "save", "login", "register"];

/// Request to store a URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Target URL (must parse as a URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias; a random one is generated when absent or empty.
    #[serde(default)]
    #[validate(length(max = 64, message = "Alias must be at most 64 characters"))]
    #[validate(regex(
        path = "*ALIAS_REGEX",
        message = "Alias may only contain letters, digits, '-' and '_'"
    ))]
    #[validate(custom(function = "validate_not_reserved"))]
    pub alias: Option<String>,
}

fn validate_not_reserved(alias: &str) -> Result<(), ValidationError> {
    if RESERVED_ALIASES.contains(&alias) {
        let mut err = ValidationError::new("reserved");
        err.message = Some("This alias is reserved".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(alias: Option<&str>) -> SaveRequest {
        SaveRequest {
            url: "https://example.com".to_string(),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_and_empty_alias_are_valid() {
        assert!(request(None).validate().is_ok());
        assert!(request(Some("")).validate().is_ok());
    }

    #[test]
    fn test_path_safe_alias_is_valid() {
        assert!(request(Some("Promo_2024-x")).validate().is_ok());
    }

    #[test]
    fn test_alias_with_slash_or_space_is_rejected() {
        assert!(request(Some("a/b")).validate().is_err());
        assert!(request(Some("a b")).validate().is_err());
        assert!(request(Some("a?b")).validate().is_err());
    }

    #[test]
    fn test_reserved_aliases_are_rejected() {
        for alias in RESERVED_ALIASES {
            assert!(request(Some(*alias)).validate().is_err(), "{alias}");
        }
        assert!(request(Some("Health")).validate().is_ok());
    }

    #[test]
    fn test_alias_length_limit() {
        assert!(request(Some("a".repeat(64).as_str())).validate().is_ok());
        assert!(request(Some("a".repeat(65).as_str())).validate().is_err());
    }
}

//! Validation of URLs submitted for shortening.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Accepted schemes. Everything after the scheme is stored verbatim.
static HTTP_SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Checks that a URL is non-empty, starts with `http://` or `https://` and
/// contains no control characters.
///
/// The stored URL is sent back verbatim in a `Location` header, which cannot
/// carry control characters.
///
/// # Errors
///
/// Returns [`AppError::Validation`] otherwise.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_original_url("https://example.com").is_ok());
/// assert!(validate_original_url("ftp://example.com").is_err());
/// assert!(validate_original_url("").is_err());
/// ```
pub fn validate_original_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() || !HTTP_SCHEME_REGEX.is_match(url) || url.chars().any(char::is_control) {
        return Err(AppError::bad_request(
            "A valid originalUrl is required (must start with http/https)",
            json!({ "originalUrl": url }),
        ));
    }

    Ok(())
}

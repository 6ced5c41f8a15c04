//! Parsing helpers for path parameters.

use crate::server::error::AppError;

/// Parses a path segment into a record id.
///
/// Path parameters arrive as strings; a non-numeric segment is a client
/// mistake and maps to 400 rather than 404, so "abc" and "999999" stay
/// distinguishable to the caller.
///
/// # Arguments
/// - `raw` - The raw path segment
/// - `label` - Resource name used in the error message, e.g. "alert"
///
/// # Returns
/// - `Ok(i32)` - The parsed id
/// - `Err(AppError::BadRequest)` - The segment is not a valid integer
pub fn parse_id(raw: &str, label: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {label} ID")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert!(matches!(parse_id("42", "alert"), Ok(42)));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = parse_id("abc", "alert").unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Invalid alert ID"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn rejects_overflowing_ids() {
        assert!(parse_id("99999999999999999999", "alert").is_err());
    }
}

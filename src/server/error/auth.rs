use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present, or it was malformed.
    #[error("Missing or malformed bearer token")]
    MissingBearerToken,

    /// Token failed verification.
    ///
    /// Covers signature mismatch, malformed payload, expiry in the past, and a
    /// subject that cannot be parsed as a user id. Collapsed into one variant so
    /// the client-facing response never reveals which check failed.
    #[error("Invalid or expired bearer token")]
    InvalidToken,

    /// Token was valid but the embedded subject no longer exists.
    #[error("Token subject {0} not found in database")]
    UnknownUser(i32),

    /// Login attempt with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized. Token-related failures share the same
/// generic "Could not validate credentials" body and carry a `WWW-Authenticate: Bearer`
/// challenge; login failures report "Invalid email or password" without revealing
/// whether the email exists. Full details are logged at debug level for diagnostics
/// while keeping client-facing messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For every variant
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failure: {}", self);

        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::MissingBearerToken | Self::InvalidToken | Self::UnknownUser(_) => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Could not validate credentials".to_string(),
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
        }
    }
}

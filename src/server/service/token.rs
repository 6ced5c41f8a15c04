//! Access token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Lifetime of an issued access token in seconds (24 hours).
///
/// Expiry is the only cancellation mechanism; there is no revocation list.
/// Rotating the signing secret invalidates every outstanding token at once.
const TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

/// Claims carried by an access token.
///
/// The subject is the user's database id, serialized as a string.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: String,
    exp: usize,
}

/// HS256 access token signer and verifier.
///
/// Built once from the process-wide signing secret and shared through the
/// application state.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service from the signing secret.
    ///
    /// Expiry is validated with zero leeway so a token is rejected the moment
    /// it expires.
    ///
    /// # Arguments
    /// - `secret` - The HS256 signing secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a signed access token for the given user.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token expiring in 24 hours
    /// - `Err(AppError::InternalError)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let expires_at = Utc::now() + Duration::seconds(TOKEN_TTL_SECS);
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: expires_at.timestamp() as usize,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| AppError::InternalError(format!("Failed to sign access token: {}", err)))
    }

    /// Verifies a token and extracts the user id it was issued for.
    ///
    /// Signature mismatch, expiry, a malformed payload, and a non-numeric
    /// subject all fail identically; callers cannot distinguish why a token
    /// was rejected.
    ///
    /// # Arguments
    /// - `token` - The raw bearer token
    ///
    /// # Returns
    /// - `Ok(i32)` - The user id embedded in a valid token
    /// - `Err(AuthError::InvalidToken)` - The token is not acceptable
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?;

        data.claims
            .user_id
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken)
    }
}

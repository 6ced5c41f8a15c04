//! Bearer token authentication guard.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

/// Guard resolving the authenticated user from a bearer token.
///
/// Protected handlers call `require` first; any failure short-circuits into a
/// 401 response with a `WWW-Authenticate: Bearer` challenge. Resolution hits
/// the database once per request and does no caching, so a deleted user is
/// locked out immediately even while holding an unexpired token.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    /// Creates a new auth guard.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Reference to the token service
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Resolves the authenticated user from the request headers.
    ///
    /// # Arguments
    /// - `headers` - The incoming request headers
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Missing/malformed header, invalid token,
    ///   or no user row for the token's subject
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let token = extract_bearer_token(headers)?;
        let user_id = self.tokens.verify(token)?;

        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownUser(user_id))?;

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingBearerToken)?
        .to_str()
        .map_err(|_| AuthError::MissingBearerToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingBearerToken)?;

    if token.is_empty() {
        return Err(AuthError::MissingBearerToken);
    }

    Ok(token)
}

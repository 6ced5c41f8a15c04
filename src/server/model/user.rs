//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserRole},
    server::error::AppError,
};

/// Registered user with credentials and role.
///
/// Carries the stored password hash; it must never cross the DTO boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC-format digest of the user's password.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here; no response shape includes it.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - The stored role string is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = UserRole::from_str_opt(&entity.role).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown role '{}' stored for user {}",
                entity.role, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a user during registration.
///
/// The password has already been hashed by the auth service; repositories
/// never see plaintext credentials.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

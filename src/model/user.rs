use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Role a registered user holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Trucker,
    Owner,
}

impl UserRole {
    /// Returns the canonical string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Trucker => "trucker",
            UserRole::Owner => "owner",
        }
    }

    /// Parses the stored database string back into the enum.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "trucker" => Some(UserRole::Trucker),
            "owner" => Some(UserRole::Owner),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration request body.
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// JSON login request body.
#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Form-encoded login request body.
///
/// Follows the OAuth2 password-grant field names, so `username` carries the
/// email address.
#[derive(Deserialize, ToSchema)]
pub struct LoginFormDto {
    pub username: String,
    pub password: String,
}

/// User response body. Never includes the password hash.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Successful login response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    pub user: UserDto,
}

//! User registration and login.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{RegisterUserDto, TokenDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::CreateUserParams,
        service::{password::PasswordService, token::TokenService},
    },
};

/// Service for registration and credential-based login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new auth service.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Reference to the token service for issuing access tokens
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// The duplicate-email check runs before hashing so a taken address fails
    /// fast; the unique index on email backs the check against races.
    ///
    /// # Arguments
    /// - `dto` - The registration request
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user, without the password hash
    /// - `Err(AppError::BadRequest)` - Validation failure or email already registered
    /// - `Err(AppError)` - Database error during lookup or insertion
    pub async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, AppError> {
        // Bounds count characters, not bytes, so multibyte names are not
        // penalized.
        if dto.name.is_empty() || dto.name.chars().count() > 100 {
            return Err(AppError::BadRequest(
                "Name must be between 1 and 100 characters".to_string(),
            ));
        }
        if !is_plausible_email(&dto.email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if dto.password.len() < 6 {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let repository = UserRepository::new(self.db);

        if repository.get_by_email(&dto.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash(&dto.password)?;

        let user = repository
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                password_hash,
                role: dto.role,
            })
            .await?;

        Ok(user.into_dto())
    }

    /// Authenticates a user and issues an access token.
    ///
    /// An unknown email and a wrong password fail identically so the response
    /// does not reveal which addresses are registered.
    ///
    /// # Arguments
    /// - `email` - The submitted email address
    /// - `password` - The submitted plaintext password
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - Access token and the authenticated user
    /// - `Err(AppError::AuthErr)` - Unknown email or wrong password
    /// - `Err(AppError)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenDto, AppError> {
        let user = UserRepository::new(self.db)
            .get_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.tokens.issue(user.id)?;

        Ok(TokenDto {
            access_token,
            token_type: "bearer".to_string(),
            user: user.into_dto(),
        })
    }
}

/// Cheap structural email check.
///
/// Full RFC validation is deliberately out of scope; the unique index and
/// confirmation flows downstream catch what this misses.
fn is_plausible_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 255 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

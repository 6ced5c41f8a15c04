use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use entity::prelude::User as UserEntity;

use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, User},
};

/// Repository for user persistence operations.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new user repository.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// The email uniqueness constraint is enforced by the database; callers
    /// check for an existing email first to report a friendly 400 instead of
    /// surfacing a constraint violation.
    ///
    /// # Arguments
    /// - `params` - Validated registration parameters with a hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(AppError)` - Database error during insertion
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user = entity::user::ActiveModel {
            name: Set(params.name),
            email: Set(params.email),
            password_hash: Set(params.password_hash),
            role: Set(params.role.as_str().to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(user)
    }

    /// Fetches a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user exists
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error during lookup
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserEntity::find_by_id(id).one(self.db).await?;

        user.map(User::from_entity).transpose()
    }

    /// Fetches a user by email address.
    ///
    /// Used both for login and for the duplicate-email check at registration.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user with that email exists
    /// - `Ok(None)` - No user with that email
    /// - `Err(AppError)` - Database error during lookup
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = UserEntity::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        user.map(User::from_entity).transpose()
    }
}

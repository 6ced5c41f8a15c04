use entity::prelude::User;
use test_utils::builder::TestBuilder;

use crate::{
    model::user::UserRole,
    server::{data::user::UserRepository, error::AppError, model::user::CreateUserParams},
};

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Dana".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role: UserRole::Trucker,
    }
}

#[tokio::test]
async fn creates_user_with_assigned_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    let user = repository.create(params("dana@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Dana");
    assert_eq!(user.email, "dana@example.com");
    assert_eq!(user.role, UserRole::Trucker);

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repository = UserRepository::new(db);

    repository.create(params("dup@example.com")).await?;
    let result = repository.create(params("dup@example.com")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

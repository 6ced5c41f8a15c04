use entity::prelude::User;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{data::user::UserRepository, error::AppError};

#[tokio::test]
async fn returns_user_matching_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .email("lookup@example.com")
        .build()
        .await?;

    let repository = UserRepository::new(db);
    let found = repository.get_by_email("lookup@example.com").await?;

    let found = found.ok_or_else(|| AppError::NotFound("user".to_string()))?;
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, "lookup@example.com");

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repository = UserRepository::new(db);
    let found = repository.get_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}

#[tokio::test]
async fn email_lookup_is_exact() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("exact@example.com")
        .build()
        .await?;

    let repository = UserRepository::new(db);
    let found = repository.get_by_email("Exact@example.com").await?;

    assert!(found.is_none());

    Ok(())
}

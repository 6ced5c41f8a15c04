use entity::prelude::User;
use test_utils::{builder::TestBuilder, factory::user::create_user};

use crate::server::{data::user::UserRepository, error::AppError};

#[tokio::test]
async fn returns_user_matching_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_user(db).await?;

    let repository = UserRepository::new(db);
    let found = repository.get_by_id(created.id).await?;

    let found = found.ok_or_else(|| AppError::NotFound("user".to_string()))?;
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, created.email);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repository = UserRepository::new(db);
    let found = repository.get_by_id(4040).await?;

    assert!(found.is_none());

    Ok(())
}

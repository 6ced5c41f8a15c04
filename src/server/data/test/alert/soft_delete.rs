use test_utils::{
    builder::TestBuilder,
    factory::{price_alert::create_alert, user::create_user},
};

use crate::server::{data::alert::AlertRepository, error::AppError};

#[tokio::test]
async fn deactivates_owned_alert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let alert = create_alert(db, user.id).await?;

    let repository = AlertRepository::new(db);
    let deleted = repository.soft_delete(user.id, alert.id).await?;

    assert!(deleted);
    let remaining = repository.get_active_for_user(user.id).await?;
    assert!(remaining.is_empty());

    Ok(())
}

#[tokio::test]
async fn reports_missing_for_unknown_alert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repository = AlertRepository::new(db);
    let deleted = repository.soft_delete(user.id, 4040).await?;

    assert!(!deleted);

    Ok(())
}

#[tokio::test]
async fn reports_missing_for_foreign_alert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let intruder = create_user(db).await?;
    let alert = create_alert(db, owner.id).await?;

    let repository = AlertRepository::new(db);
    let deleted = repository.soft_delete(intruder.id, alert.id).await?;

    assert!(!deleted);
    // The owner's alert is untouched.
    let remaining = repository.get_active_for_user(owner.id).await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

#[tokio::test]
async fn reports_missing_for_already_deleted_alert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let alert = create_alert(db, user.id).await?;

    let repository = AlertRepository::new(db);
    assert!(repository.soft_delete(user.id, alert.id).await?);
    assert!(!repository.soft_delete(user.id, alert.id).await?);

    Ok(())
}

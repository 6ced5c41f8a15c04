use test_utils::{
    builder::TestBuilder,
    factory::{
        price_alert::{create_alert, PriceAlertFactory},
        user::create_user,
    },
};

use crate::server::{data::alert::AlertRepository, error::AppError};

#[tokio::test]
async fn returns_only_active_alerts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let active = create_alert(db, user.id).await?;
    PriceAlertFactory::new(db, user.id)
        .active(false)
        .build()
        .await?;

    let repository = AlertRepository::new(db);
    let alerts = repository.get_active_for_user(user.id).await?;

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, active.id);

    Ok(())
}

#[tokio::test]
async fn excludes_other_users_alerts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    create_alert(db, owner.id).await?;
    create_alert(db, other.id).await?;

    let repository = AlertRepository::new(db);
    let alerts = repository.get_active_for_user(owner.id).await?;

    assert_eq!(alerts.len(), 1);
    assert!(alerts.iter().all(|alert| alert.user_id == owner.id));

    Ok(())
}

#[tokio::test]
async fn returns_empty_list_without_alerts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repository = AlertRepository::new(db);
    let alerts = repository.get_active_for_user(user.id).await?;

    assert!(alerts.is_empty());

    Ok(())
}

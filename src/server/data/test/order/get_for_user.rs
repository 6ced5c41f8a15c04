use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{order::OrderFactory, user::create_user},
};

use crate::server::{data::order::OrderRepository, error::AppError};

#[tokio::test]
async fn returns_orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let older = OrderFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = OrderFactory::new(db, user.id).build().await?;

    let repository = OrderRepository::new(db);
    let orders = repository.get_for_user(user.id).await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, newer.id);
    assert_eq!(orders[1].id, older.id);

    Ok(())
}

#[tokio::test]
async fn excludes_other_users_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    OrderFactory::new(db, owner.id).build().await?;
    OrderFactory::new(db, other.id).build().await?;

    let repository = OrderRepository::new(db);
    let orders = repository.get_for_user(owner.id).await?;

    assert_eq!(orders.len(), 1);
    assert!(orders.iter().all(|order| order.user_id == owner.id));

    Ok(())
}

#[tokio::test]
async fn returns_empty_list_without_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repository = OrderRepository::new(db);
    let orders = repository.get_for_user(user.id).await?;

    assert!(orders.is_empty());

    Ok(())
}

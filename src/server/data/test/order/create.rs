use test_utils::{builder::TestBuilder, factory::user::create_user};

use crate::{
    model::{order::OrderStatus, product::Product},
    server::{data::order::OrderRepository, error::AppError, model::order::CreateOrderParams},
};

#[tokio::test]
async fn creates_pending_order_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repository = OrderRepository::new(db);
    let order = repository
        .create(CreateOrderParams {
            user_id: user.id,
            product: Product::Gasoline,
            area: "PADD 5".to_string(),
            quantity: 250,
            target_price: 3.15,
            location: Some("Bakersfield, CA".to_string()),
        })
        .await?;

    assert!(order.id > 0);
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.location.as_deref(), Some("Bakersfield, CA"));

    Ok(())
}

#[tokio::test]
async fn creates_order_without_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repository = OrderRepository::new(db);
    let order = repository
        .create(CreateOrderParams {
            user_id: user.id,
            product: Product::Diesel,
            area: "PADD 2".to_string(),
            quantity: 100,
            target_price: 3.75,
            location: None,
        })
        .await?;

    assert!(order.location.is_none());

    Ok(())
}

use test_utils::{builder::TestBuilder, factory::user::create_user};

use crate::{
    model::product::Product,
    server::{data::alert::AlertRepository, error::AppError, model::alert::CreateAlertParams},
};

#[tokio::test]
async fn creates_active_alert_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repository = AlertRepository::new(db);
    let alert = repository
        .create(CreateAlertParams {
            user_id: user.id,
            product: Product::Diesel,
            area: "PADD 1".to_string(),
            threshold: 3.89,
        })
        .await?;

    assert!(alert.id > 0);
    assert_eq!(alert.user_id, user.id);
    assert_eq!(alert.product, Product::Diesel);
    assert_eq!(alert.area, "PADD 1");
    assert!(alert.active);

    Ok(())
}

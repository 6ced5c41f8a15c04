use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(PriceAlert::Id))
                    .col(integer(PriceAlert::UserId))
                    .col(string(PriceAlert::Product))
                    .col(string(PriceAlert::Area))
                    .col(double(PriceAlert::Threshold))
                    .col(boolean(PriceAlert::Active).default(true))
                    .col(
                        timestamp_with_time_zone(PriceAlert::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_alert_user_id")
                            .from(PriceAlert::Table, PriceAlert::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceAlert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PriceAlert {
    Table,
    Id,
    UserId,
    Product,
    Area,
    Threshold,
    Active,
    CreatedAt,
}

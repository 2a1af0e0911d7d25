use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BonusTier::Table)
                    .if_not_exists()
                    .col(pk_auto(BonusTier::Id))
                    .col(string_len(BonusTier::Period, 8))
                    .col(big_integer(BonusTier::MinCents))
                    .col(big_integer_null(BonusTier::MaxCents))
                    .col(integer(BonusTier::PercentBps))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BonusTier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BonusTier {
    Table,
    Id,
    Period,
    MinCents,
    MaxCents,
    PercentBps,
}

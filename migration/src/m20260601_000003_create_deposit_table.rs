use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deposit::Table)
                    .if_not_exists()
                    .col(pk_auto(Deposit::Id))
                    .col(integer(Deposit::ProcessorId))
                    .col(big_integer(Deposit::AmountCents))
                    .col(timestamp_with_time_zone(Deposit::DepositedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deposit_processor")
                            .from(Deposit::Table, Deposit::ProcessorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deposit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deposit {
    Table,
    Id,
    ProcessorId,
    AmountCents,
    DepositedAt,
}

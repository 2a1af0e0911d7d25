use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinanceAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(FinanceAccount::Id))
                    .col(string(FinanceAccount::Name))
                    .col(string_len(FinanceAccount::Currency, 8))
                    .col(boolean(FinanceAccount::Archived))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinanceAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FinanceAccount {
    Table,
    Id,
    Name,
    Currency,
    Archived,
}

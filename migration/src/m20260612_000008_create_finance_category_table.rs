use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinanceCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(FinanceCategory::Id))
                    .col(string(FinanceCategory::Name))
                    .col(string_len(FinanceCategory::Kind, 8))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinanceCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FinanceCategory {
    Table,
    Id,
    Name,
    Kind,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocSection::Table)
                    .if_not_exists()
                    .col(pk_auto(DocSection::Id))
                    .col(string_uniq(DocSection::Slug))
                    .col(string(DocSection::Title))
                    .col(integer(DocSection::Position))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DocSection {
    Table,
    Id,
    Slug,
    Title,
    Position,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260605_000005_create_doc_section_table::DocSection;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocPage::Table)
                    .if_not_exists()
                    .col(pk_auto(DocPage::Id))
                    .col(integer(DocPage::SectionId))
                    .col(string_uniq(DocPage::Slug))
                    .col(string(DocPage::Title))
                    .col(text(DocPage::Content))
                    .col(integer(DocPage::Position))
                    .col(boolean(DocPage::Published))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doc_page_section")
                            .from(DocPage::Table, DocPage::SectionId)
                            .to(DocSection::Table, DocSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocPage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DocPage {
    Table,
    Id,
    SectionId,
    Slug,
    Title,
    Content,
    Position,
    Published,
}

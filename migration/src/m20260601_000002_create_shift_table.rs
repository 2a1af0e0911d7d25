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
                    .table(Shift::Table)
                    .if_not_exists()
                    .col(pk_auto(Shift::Id))
                    .col(integer(Shift::UserId))
                    .col(timestamp_with_time_zone(Shift::StartedAt))
                    .col(timestamp_with_time_zone_null(Shift::EndedAt))
                    .col(string_null(Shift::Note))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_user")
                            .from(Shift::Table, Shift::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shift::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shift {
    Table,
    Id,
    UserId,
    StartedAt,
    EndedAt,
    Note,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260612_000007_create_finance_account_table::FinanceAccount,
    m20260612_000008_create_finance_category_table::FinanceCategory,
    m20260612_000009_create_counterparty_table::Counterparty,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinanceTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(FinanceTransaction::Id))
                    .col(integer(FinanceTransaction::AccountId))
                    .col(integer_null(FinanceTransaction::CategoryId))
                    .col(integer_null(FinanceTransaction::CounterpartyId))
                    .col(big_integer(FinanceTransaction::AmountCents))
                    .col(timestamp_with_time_zone(FinanceTransaction::OccurredAt))
                    .col(string_null(FinanceTransaction::Note))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_finance_transaction_account")
                            .from(FinanceTransaction::Table, FinanceTransaction::AccountId)
                            .to(FinanceAccount::Table, FinanceAccount::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_finance_transaction_category")
                            .from(FinanceTransaction::Table, FinanceTransaction::CategoryId)
                            .to(FinanceCategory::Table, FinanceCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_finance_transaction_counterparty")
                            .from(
                                FinanceTransaction::Table,
                                FinanceTransaction::CounterpartyId,
                            )
                            .to(Counterparty::Table, Counterparty::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinanceTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FinanceTransaction {
    Table,
    Id,
    AccountId,
    CategoryId,
    CounterpartyId,
    AmountCents,
    OccurredAt,
    Note,
}

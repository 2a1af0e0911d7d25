pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_user_table;
mod m20260601_000002_create_shift_table;
mod m20260601_000003_create_deposit_table;
mod m20260601_000004_create_bonus_tier_table;
mod m20260605_000005_create_doc_section_table;
mod m20260605_000006_create_doc_page_table;
mod m20260612_000007_create_finance_account_table;
mod m20260612_000008_create_finance_category_table;
mod m20260612_000009_create_counterparty_table;
mod m20260612_000010_create_finance_transaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_user_table::Migration),
            Box::new(m20260601_000002_create_shift_table::Migration),
            Box::new(m20260601_000003_create_deposit_table::Migration),
            Box::new(m20260601_000004_create_bonus_tier_table::Migration),
            Box::new(m20260605_000005_create_doc_section_table::Migration),
            Box::new(m20260605_000006_create_doc_page_table::Migration),
            Box::new(m20260612_000007_create_finance_account_table::Migration),
            Box::new(m20260612_000008_create_finance_category_table::Migration),
            Box::new(m20260612_000009_create_counterparty_table::Migration),
            Box::new(m20260612_000010_create_finance_transaction_table::Migration),
        ]
    }
}

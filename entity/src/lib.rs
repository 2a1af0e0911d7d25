//! SeaORM entity models for the Umbra Platform database schema.

pub mod prelude;

pub mod bonus_tier;
pub mod counterparty;
pub mod deposit;
pub mod doc_page;
pub mod doc_section;
pub mod finance_account;
pub mod finance_category;
pub mod finance_transaction;
pub mod sea_orm_active_enums;
pub mod shift;
pub mod user;

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod bonus_tier;
pub mod counterparty;
pub mod deposit;
pub mod doc_page;
pub mod doc_section;
pub mod finance_account;
pub mod finance_category;
pub mod finance_transaction;
pub mod shift;
pub mod user;

#[cfg(test)]
mod test;

//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a finance transaction with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Finance account
/// 2. Income category
/// 3. Counterparty
/// 4. Transaction linking all three
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((account, category, counterparty, transaction))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_transaction_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::finance_account::Model,
        entity::finance_category::Model,
        entity::counterparty::Model,
        entity::finance_transaction::Model,
    ),
    DbErr,
> {
    let account = crate::factory::finance_account::create_account(db).await?;
    let category = crate::factory::finance_category::create_category(
        db,
        entity::sea_orm_active_enums::CategoryKind::Income,
    )
    .await?;
    let counterparty = crate::factory::counterparty::create_counterparty(db).await?;
    let transaction = crate::factory::finance_transaction::FinanceTransactionFactory::new(
        db,
        account.id,
    )
    .category_id(Some(category.id))
    .counterparty_id(Some(counterparty.id))
    .build()
    .await?;

    Ok((account, category, counterparty, transaction))
}

/// Creates a documentation page together with its parent section.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((section, page))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_page_with_section(
    db: &DatabaseConnection,
) -> Result<(entity::doc_section::Model, entity::doc_page::Model), DbErr> {
    let section = crate::factory::doc_section::create_section(db).await?;
    let page = crate::factory::doc_page::create_page(db, section.id).await?;

    Ok((section, page))
}

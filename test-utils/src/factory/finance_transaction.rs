//! Finance transaction factory for creating test transaction entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test finance transactions.
///
/// Transactions default to a positive amount with no category or counterparty.
/// Expense rows should set a negative amount to match the ledger convention.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::finance_transaction::FinanceTransactionFactory;
///
/// let tx = FinanceTransactionFactory::new(&db, account.id)
///     .amount_cents(-4_500)
///     .category_id(Some(expense_category.id))
///     .note(Some("office supplies"))
///     .build()
///     .await?;
/// ```
pub struct FinanceTransactionFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i32,
    category_id: Option<i32>,
    counterparty_id: Option<i32>,
    amount_cents: i64,
    occurred_at: DateTime<Utc>,
    note: Option<String>,
}

impl<'a> FinanceTransactionFactory<'a> {
    /// Creates a new FinanceTransactionFactory with default values.
    ///
    /// Defaults:
    /// - category_id: `None`
    /// - counterparty_id: `None`
    /// - amount_cents: `10_000` (100.00 income)
    /// - occurred_at: current time
    /// - note: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `account_id` - ID of the account the transaction belongs to
    pub fn new(db: &'a DatabaseConnection, account_id: i32) -> Self {
        Self {
            db,
            account_id,
            category_id: None,
            counterparty_id: None,
            amount_cents: 10_000,
            occurred_at: Utc::now(),
            note: None,
        }
    }

    /// Sets the category for the transaction.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the counterparty for the transaction.
    pub fn counterparty_id(mut self, counterparty_id: Option<i32>) -> Self {
        self.counterparty_id = counterparty_id;
        self
    }

    /// Sets the signed amount in cents.
    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    /// Sets the timestamp the transaction occurred at.
    pub fn occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = occurred_at;
        self
    }

    /// Sets the free-form note for the transaction.
    pub fn note(mut self, note: Option<impl Into<String>>) -> Self {
        self.note = note.map(Into::into);
        self
    }

    /// Builds and inserts the transaction entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::finance_transaction::Model)` - Created transaction entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::finance_transaction::Model, DbErr> {
        entity::finance_transaction::ActiveModel {
            id: ActiveValue::NotSet,
            account_id: ActiveValue::Set(self.account_id),
            category_id: ActiveValue::Set(self.category_id),
            counterparty_id: ActiveValue::Set(self.counterparty_id),
            amount_cents: ActiveValue::Set(self.amount_cents),
            occurred_at: ActiveValue::Set(self.occurred_at),
            note: ActiveValue::Set(self.note),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a transaction with a specific amount and no category or counterparty.
///
/// Shorthand for
/// `FinanceTransactionFactory::new(db, account_id).amount_cents(amount_cents).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `account_id` - ID of the account the transaction belongs to
/// - `amount_cents` - Signed amount in cents
///
/// # Returns
/// - `Ok(entity::finance_transaction::Model)` - Created transaction entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_transaction(
    db: &DatabaseConnection,
    account_id: i32,
    amount_cents: i64,
) -> Result<entity::finance_transaction::Model, DbErr> {
    FinanceTransactionFactory::new(db, account_id)
        .amount_cents(amount_cents)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_transaction_with_dependencies;

    #[tokio::test]
    async fn creates_transaction_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_finance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (account, category, counterparty, transaction) =
            create_transaction_with_dependencies(db).await?;

        assert_eq!(transaction.account_id, account.id);
        assert_eq!(transaction.category_id, Some(category.id));
        assert_eq!(transaction.counterparty_id, Some(counterparty.id));

        Ok(())
    }
}

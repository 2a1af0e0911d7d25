//! Deposit factory for creating test deposit entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test deposits with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deposit::DepositFactory;
///
/// let deposit = DepositFactory::new(&db, processor.id)
///     .amount_cents(150_000)
///     .deposited_at(some_timestamp)
///     .build()
///     .await?;
/// ```
pub struct DepositFactory<'a> {
    db: &'a DatabaseConnection,
    processor_id: i32,
    amount_cents: i64,
    deposited_at: DateTime<Utc>,
}

impl<'a> DepositFactory<'a> {
    /// Creates a new DepositFactory with default values.
    ///
    /// Defaults:
    /// - amount_cents: `10_000` (100.00)
    /// - deposited_at: current time
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `processor_id` - ID of the processor who took the deposit
    pub fn new(db: &'a DatabaseConnection, processor_id: i32) -> Self {
        Self {
            db,
            processor_id,
            amount_cents: 10_000,
            deposited_at: Utc::now(),
        }
    }

    /// Sets the deposit amount in cents.
    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    /// Sets the timestamp the deposit was taken at.
    pub fn deposited_at(mut self, deposited_at: DateTime<Utc>) -> Self {
        self.deposited_at = deposited_at;
        self
    }

    /// Builds and inserts the deposit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::deposit::Model)` - Created deposit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::deposit::Model, DbErr> {
        entity::deposit::ActiveModel {
            id: ActiveValue::NotSet,
            processor_id: ActiveValue::Set(self.processor_id),
            amount_cents: ActiveValue::Set(self.amount_cents),
            deposited_at: ActiveValue::Set(self.deposited_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deposit with a specific amount.
///
/// Shorthand for `DepositFactory::new(db, processor_id).amount_cents(amount_cents).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `processor_id` - ID of the processor who took the deposit
/// - `amount_cents` - Deposit amount in cents
///
/// # Returns
/// - `Ok(entity::deposit::Model)` - Created deposit entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_deposit(
    db: &DatabaseConnection,
    processor_id: i32,
    amount_cents: i64,
) -> Result<entity::deposit::Model, DbErr> {
    DepositFactory::new(db, processor_id)
        .amount_cents(amount_cents)
        .build()
        .await
}

//! Finance account factory for creating test account entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test finance accounts.
pub struct FinanceAccountFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    currency: String,
    archived: bool,
}

impl<'a> FinanceAccountFactory<'a> {
    /// Creates a new FinanceAccountFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Account {id}"` where id is auto-incremented
    /// - currency: `"USD"`
    /// - archived: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Account {}", id),
            currency: "USD".to_string(),
            archived: false,
        }
    }

    /// Sets the display name for the account.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the currency code for the account.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the archived flag for the account.
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::finance_account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::finance_account::Model, DbErr> {
        entity::finance_account::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            currency: ActiveValue::Set(self.currency),
            archived: ActiveValue::Set(self.archived),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a finance account with default values.
///
/// Shorthand for `FinanceAccountFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::finance_account::Model)` - Created account entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_account(
    db: &DatabaseConnection,
) -> Result<entity::finance_account::Model, DbErr> {
    FinanceAccountFactory::new(db).build().await
}

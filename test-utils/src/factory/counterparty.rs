//! Counterparty factory for creating test counterparty entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test counterparties.
pub struct CounterpartyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    note: Option<String>,
}

impl<'a> CounterpartyFactory<'a> {
    /// Creates a new CounterpartyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Counterparty {id}"` where id is auto-incremented
    /// - note: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Counterparty {}", id),
            note: None,
        }
    }

    /// Sets the display name for the counterparty.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the free-form note for the counterparty.
    pub fn note(mut self, note: Option<impl Into<String>>) -> Self {
        self.note = note.map(Into::into);
        self
    }

    /// Builds and inserts the counterparty entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::counterparty::Model)` - Created counterparty entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::counterparty::Model, DbErr> {
        entity::counterparty::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            note: ActiveValue::Set(self.note),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a counterparty with default values.
///
/// Shorthand for `CounterpartyFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::counterparty::Model)` - Created counterparty entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_counterparty(
    db: &DatabaseConnection,
) -> Result<entity::counterparty::Model, DbErr> {
    CounterpartyFactory::new(db).build().await
}

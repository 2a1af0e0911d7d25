//! Finance category factory for creating test category entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::CategoryKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test finance categories.
pub struct FinanceCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: CategoryKind,
}

impl<'a> FinanceCategoryFactory<'a> {
    /// Creates a new FinanceCategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"` where id is auto-incremented
    /// - kind: `CategoryKind::Income`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
            kind: CategoryKind::Income,
        }
    }

    /// Sets the display name for the category.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the kind of money movement the category classifies.
    pub fn kind(mut self, kind: CategoryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::finance_category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::finance_category::Model, DbErr> {
        entity::finance_category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a finance category of the given kind.
///
/// Shorthand for `FinanceCategoryFactory::new(db).kind(kind).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `kind` - Kind of money movement the category classifies
///
/// # Returns
/// - `Ok(entity::finance_category::Model)` - Created category entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_category(
    db: &DatabaseConnection,
    kind: CategoryKind,
) -> Result<entity::finance_category::Model, DbErr> {
    FinanceCategoryFactory::new(db).kind(kind).build().await
}

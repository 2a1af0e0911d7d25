//! Documentation section factory for creating test section entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test documentation sections.
///
/// Slugs default to a unique auto-generated value so multiple sections can be
/// created in one test without violating the unique constraint.
pub struct DocSectionFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    position: i32,
}

impl<'a> DocSectionFactory<'a> {
    /// Creates a new DocSectionFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"section-{id}"` where id is auto-incremented
    /// - title: `"Section {id}"`
    /// - position: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("section-{}", id),
            title: format!("Section {}", id),
            position: 0,
        }
    }

    /// Sets the unique slug for the section.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the display title for the section.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the ordering position for the section.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Builds and inserts the section entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::doc_section::Model)` - Created section entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::doc_section::Model, DbErr> {
        entity::doc_section::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            position: ActiveValue::Set(self.position),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a documentation section with default values.
///
/// Shorthand for `DocSectionFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::doc_section::Model)` - Created section entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_section(
    db: &DatabaseConnection,
) -> Result<entity::doc_section::Model, DbErr> {
    DocSectionFactory::new(db).build().await
}

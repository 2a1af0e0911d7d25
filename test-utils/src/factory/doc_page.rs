//! Documentation page factory for creating test page entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test documentation pages.
///
/// Pages are created published by default so read-path tests see them without
/// extra setup. Use `published(false)` to test draft gating.
pub struct DocPageFactory<'a> {
    db: &'a DatabaseConnection,
    section_id: i32,
    slug: String,
    title: String,
    content: String,
    position: i32,
    published: bool,
}

impl<'a> DocPageFactory<'a> {
    /// Creates a new DocPageFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"page-{id}"` where id is auto-incremented
    /// - title: `"Page {id}"`
    /// - content: short placeholder text
    /// - position: `0`
    /// - published: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `section_id` - ID of the parent section
    pub fn new(db: &'a DatabaseConnection, section_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            section_id,
            slug: format!("page-{}", id),
            title: format!("Page {}", id),
            content: "Test page content.".to_string(),
            position: 0,
            published: true,
        }
    }

    /// Sets the unique slug for the page.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the display title for the page.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the markdown content for the page.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the ordering position within the section.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the published flag for the page.
    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Builds and inserts the page entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::doc_page::Model)` - Created page entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::doc_page::Model, DbErr> {
        entity::doc_page::ActiveModel {
            id: ActiveValue::NotSet,
            section_id: ActiveValue::Set(self.section_id),
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            position: ActiveValue::Set(self.position),
            published: ActiveValue::Set(self.published),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published documentation page with default values.
///
/// Shorthand for `DocPageFactory::new(db, section_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `section_id` - ID of the parent section
///
/// # Returns
/// - `Ok(entity::doc_page::Model)` - Created page entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_page(
    db: &DatabaseConnection,
    section_id: i32,
) -> Result<entity::doc_page::Model, DbErr> {
    DocPageFactory::new(db, section_id).build().await
}

//! Documentation content service.
//!
//! Sections and pages form a two-level content tree. Slugs are unique across
//! sections and across pages; when a slug is not supplied it is derived from the
//! title. Unpublished pages exist only for admins.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{doc_page::DocPageRepository, doc_section::DocSectionRepository},
    error::AppError,
    model::{
        docs::{
            CreateDocPageParam, CreateDocSectionParam, DocPage, DocSection, UpdateDocPageParam,
            UpdateDocSectionParam,
        },
        user::User,
    },
    util::slug::slugify,
};

/// Service handling documentation sections and pages.
pub struct DocsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all sections ordered by position, each with its pages.
    ///
    /// Unpublished pages are stripped for non-admin callers.
    pub async fn get_sections(&self, caller: &User) -> Result<Vec<DocSection>, AppError> {
        let page_repo = DocPageRepository::new(self.db);

        let mut sections = DocSectionRepository::new(self.db).get_all_ordered().await?;

        for section in &mut sections {
            let mut pages = page_repo.list_by_section(section.id).await?;

            if !caller.is_admin() {
                pages.retain(|page| page.published);
            }

            section.pages = pages;
        }

        Ok(sections)
    }

    /// Creates a section.
    ///
    /// # Returns
    /// - `Ok(DocSection)` - The created section
    /// - `Err(AppError::BadRequest)` - Slug empty after derivation, or taken
    pub async fn create_section(
        &self,
        slug: Option<String>,
        title: String,
        position: i32,
    ) -> Result<DocSection, AppError> {
        let section_repo = DocSectionRepository::new(self.db);

        let slug = resolve_slug(slug, &title)?;

        if section_repo.slug_exists(&slug, None).await? {
            return Err(AppError::BadRequest(format!(
                "A section with slug '{slug}' already exists"
            )));
        }

        let section = section_repo
            .create(CreateDocSectionParam {
                slug,
                title,
                position,
            })
            .await?;

        Ok(section)
    }

    /// Updates a section's slug, title, and position.
    pub async fn update_section(
        &self,
        section_id: i32,
        slug: Option<String>,
        title: String,
        position: i32,
    ) -> Result<DocSection, AppError> {
        let section_repo = DocSectionRepository::new(self.db);

        let slug = resolve_slug(slug, &title)?;

        if section_repo.slug_exists(&slug, Some(section_id)).await? {
            return Err(AppError::BadRequest(format!(
                "A section with slug '{slug}' already exists"
            )));
        }

        let section = section_repo
            .update(UpdateDocSectionParam {
                section_id,
                slug,
                title,
                position,
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Section not found".to_string()))?;

        Ok(section)
    }

    /// Deletes a section together with its pages.
    pub async fn delete_section(&self, section_id: i32) -> Result<(), AppError> {
        let deleted = DocSectionRepository::new(self.db)
            .delete_with_pages(section_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Section not found".to_string()));
        }

        Ok(())
    }

    /// Fetches a page by slug.
    ///
    /// Unpublished pages are indistinguishable from missing ones for
    /// non-admin callers.
    ///
    /// # Returns
    /// - `Ok(DocPage)` - The page
    /// - `Err(AppError::NotFound)` - No such slug, or unpublished and caller
    ///   is not an admin
    pub async fn get_page_by_slug(&self, caller: &User, slug: &str) -> Result<DocPage, AppError> {
        let page = DocPageRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

        if !page.published && !caller.is_admin() {
            return Err(AppError::NotFound("Page not found".to_string()));
        }

        Ok(page)
    }

    /// Creates a page inside a section.
    ///
    /// # Returns
    /// - `Ok(DocPage)` - The created page
    /// - `Err(AppError::BadRequest)` - Unknown section, empty slug, or slug taken
    pub async fn create_page(
        &self,
        section_id: i32,
        slug: Option<String>,
        title: String,
        content: String,
        position: i32,
        published: bool,
    ) -> Result<DocPage, AppError> {
        let page_repo = DocPageRepository::new(self.db);

        if DocSectionRepository::new(self.db)
            .find_by_id(section_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "No section with id {section_id}"
            )));
        }

        let slug = resolve_slug(slug, &title)?;

        if page_repo.slug_exists(&slug, None).await? {
            return Err(AppError::BadRequest(format!(
                "A page with slug '{slug}' already exists"
            )));
        }

        let page = page_repo
            .create(CreateDocPageParam {
                section_id,
                slug,
                title,
                content,
                position,
                published,
            })
            .await?;

        Ok(page)
    }

    /// Updates a page's fields, including moving it between sections.
    pub async fn update_page(
        &self,
        page_id: i32,
        section_id: i32,
        slug: Option<String>,
        title: String,
        content: String,
        position: i32,
        published: bool,
    ) -> Result<DocPage, AppError> {
        let page_repo = DocPageRepository::new(self.db);

        if DocSectionRepository::new(self.db)
            .find_by_id(section_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "No section with id {section_id}"
            )));
        }

        let slug = resolve_slug(slug, &title)?;

        if page_repo.slug_exists(&slug, Some(page_id)).await? {
            return Err(AppError::BadRequest(format!(
                "A page with slug '{slug}' already exists"
            )));
        }

        let page = page_repo
            .update(UpdateDocPageParam {
                page_id,
                section_id,
                slug,
                title,
                content,
                position,
                published,
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

        Ok(page)
    }

    /// Deletes a page.
    pub async fn delete_page(&self, page_id: i32) -> Result<(), AppError> {
        let deleted = DocPageRepository::new(self.db).delete(page_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Page not found".to_string()));
        }

        Ok(())
    }
}

/// Uses the explicit slug when given, otherwise derives one from the title.
fn resolve_slug(slug: Option<String>, title: &str) -> Result<String, AppError> {
    let slug = match slug {
        Some(s) if !s.trim().is_empty() => slugify(&s),
        _ => slugify(title),
    };

    if slug.is_empty() {
        return Err(AppError::BadRequest(
            "Cannot derive a slug from this title; provide one explicitly".to_string(),
        ));
    }

    Ok(slug)
}

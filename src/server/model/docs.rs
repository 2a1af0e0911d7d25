//! Documentation content domain models and parameters.

use crate::model::docs::{DocPageDto, DocPageSummaryDto, DocSectionDto};

/// A documentation section with its pages, ordered by position.
#[derive(Debug, Clone, PartialEq)]
pub struct DocSection {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub position: i32,
    pub pages: Vec<DocPage>,
}

impl DocSection {
    pub fn into_dto(self) -> DocSectionDto {
        DocSectionDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            position: self.position,
            pages: self.pages.into_iter().map(|p| p.into_summary_dto()).collect(),
        }
    }

    pub fn from_entity(entity: entity::doc_section::Model, pages: Vec<DocPage>) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            position: entity.position,
            pages,
        }
    }
}

/// A documentation page with its markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct DocPage {
    pub id: i32,
    pub section_id: i32,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub published: bool,
}

impl DocPage {
    pub fn into_dto(self) -> DocPageDto {
        DocPageDto {
            id: self.id,
            section_id: self.section_id,
            slug: self.slug,
            title: self.title,
            content: self.content,
            position: self.position,
            published: self.published,
        }
    }

    pub fn into_summary_dto(self) -> DocPageSummaryDto {
        DocPageSummaryDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            position: self.position,
            published: self.published,
        }
    }

    pub fn from_entity(entity: entity::doc_page::Model) -> Self {
        Self {
            id: entity.id,
            section_id: entity.section_id,
            slug: entity.slug,
            title: entity.title,
            content: entity.content,
            position: entity.position,
            published: entity.published,
        }
    }
}

/// Parameters for creating a section. The slug is already resolved
/// (explicit or derived from the title) by the service.
#[derive(Debug, Clone)]
pub struct CreateDocSectionParam {
    pub slug: String,
    pub title: String,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateDocSectionParam {
    pub section_id: i32,
    pub slug: String,
    pub title: String,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct CreateDocPageParam {
    pub section_id: i32,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub published: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateDocPageParam {
    pub page_id: i32,
    pub section_id: i32,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub published: bool,
}

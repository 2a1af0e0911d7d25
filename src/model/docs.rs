use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DocSectionDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub position: i32,
    pub pages: Vec<DocPageSummaryDto>,
}

/// Page listing entry without the markdown body.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DocPageSummaryDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub position: i32,
    pub published: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DocPageDto {
    pub id: i32,
    pub section_id: i32,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub published: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateDocSectionDto {
    pub title: String,
    /// Derived from the title when omitted.
    pub slug: Option<String>,
    pub position: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateDocSectionDto {
    pub title: String,
    pub slug: String,
    pub position: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateDocPageDto {
    pub section_id: i32,
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub position: i32,
    pub published: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateDocPageDto {
    pub section_id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub position: i32,
    pub published: bool,
}

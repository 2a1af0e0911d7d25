//! Documentation page data repository.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::docs::{CreateDocPageParam, DocPage, UpdateDocPageParam};

/// Repository providing database operations for documentation pages.
pub struct DocPageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocPageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDocPageParam) -> Result<DocPage, DbErr> {
        let entity = entity::prelude::DocPage::insert(entity::doc_page::ActiveModel {
            section_id: ActiveValue::Set(param.section_id),
            slug: ActiveValue::Set(param.slug),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            position: ActiveValue::Set(param.position),
            published: ActiveValue::Set(param.published),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(DocPage::from_entity(entity))
    }

    pub async fn find_by_id(&self, page_id: i32) -> Result<Option<DocPage>, DbErr> {
        let entity = entity::prelude::DocPage::find_by_id(page_id)
            .one(self.db)
            .await?;

        Ok(entity.map(DocPage::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<DocPage>, DbErr> {
        let entity = entity::prelude::DocPage::find()
            .filter(entity::doc_page::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(DocPage::from_entity))
    }

    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::DocPage::find().filter(entity::doc_page::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::doc_page::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Returns a section's pages ordered by position.
    pub async fn list_by_section(&self, section_id: i32) -> Result<Vec<DocPage>, DbErr> {
        let pages = entity::prelude::DocPage::find()
            .filter(entity::doc_page::Column::SectionId.eq(section_id))
            .order_by_asc(entity::doc_page::Column::Position)
            .order_by_asc(entity::doc_page::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(DocPage::from_entity)
            .collect();

        Ok(pages)
    }

    pub async fn update(&self, param: UpdateDocPageParam) -> Result<Option<DocPage>, DbErr> {
        let Some(existing) = entity::prelude::DocPage::find_by_id(param.page_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::doc_page::ActiveModel = existing.into();
        active.section_id = ActiveValue::Set(param.section_id);
        active.slug = ActiveValue::Set(param.slug);
        active.title = ActiveValue::Set(param.title);
        active.content = ActiveValue::Set(param.content);
        active.position = ActiveValue::Set(param.position);
        active.published = ActiveValue::Set(param.published);

        let updated = entity::prelude::DocPage::update(active).exec(self.db).await?;

        Ok(Some(DocPage::from_entity(updated)))
    }

    pub async fn delete(&self, page_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DocPage::delete_by_id(page_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Documentation section data repository.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::docs::{CreateDocSectionParam, DocSection, UpdateDocSectionParam};

/// Repository providing database operations for documentation sections.
pub struct DocSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDocSectionParam) -> Result<DocSection, DbErr> {
        let entity = entity::prelude::DocSection::insert(entity::doc_section::ActiveModel {
            slug: ActiveValue::Set(param.slug),
            title: ActiveValue::Set(param.title),
            position: ActiveValue::Set(param.position),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(DocSection::from_entity(entity, Vec::new()))
    }

    pub async fn find_by_id(&self, section_id: i32) -> Result<Option<DocSection>, DbErr> {
        let entity = entity::prelude::DocSection::find_by_id(section_id)
            .one(self.db)
            .await?;

        Ok(entity.map(|e| DocSection::from_entity(e, Vec::new())))
    }

    /// Checks whether a slug is already taken, optionally ignoring one section
    /// (the one being updated).
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::DocSection::find()
            .filter(entity::doc_section::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::doc_section::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Returns all sections ordered by position, without pages.
    pub async fn get_all_ordered(&self) -> Result<Vec<DocSection>, DbErr> {
        let sections = entity::prelude::DocSection::find()
            .order_by_asc(entity::doc_section::Column::Position)
            .order_by_asc(entity::doc_section::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| DocSection::from_entity(e, Vec::new()))
            .collect();

        Ok(sections)
    }

    pub async fn update(&self, param: UpdateDocSectionParam) -> Result<Option<DocSection>, DbErr> {
        let Some(existing) = entity::prelude::DocSection::find_by_id(param.section_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::doc_section::ActiveModel = existing.into();
        active.slug = ActiveValue::Set(param.slug);
        active.title = ActiveValue::Set(param.title);
        active.position = ActiveValue::Set(param.position);

        let updated = entity::prelude::DocSection::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(DocSection::from_entity(updated, Vec::new())))
    }

    /// Deletes a section together with its pages.
    ///
    /// Pages are removed explicitly rather than relying on the FK cascade so
    /// behavior is identical on the SQLite test backend.
    pub async fn delete_with_pages(&self, section_id: i32) -> Result<bool, DbErr> {
        entity::prelude::DocPage::delete_many()
            .filter(entity::doc_page::Column::SectionId.eq(section_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::DocSection::delete_by_id(section_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

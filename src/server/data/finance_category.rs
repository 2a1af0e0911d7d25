//! Finance category data repository.

use entity::sea_orm_active_enums::CategoryKind;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::finance::FinanceCategory;

/// Repository providing database operations for finance categories.
pub struct FinanceCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, kind: CategoryKind) -> Result<FinanceCategory, DbErr> {
        let entity =
            entity::prelude::FinanceCategory::insert(entity::finance_category::ActiveModel {
                name: ActiveValue::Set(name),
                kind: ActiveValue::Set(kind),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?;

        Ok(FinanceCategory::from_entity(entity))
    }

    pub async fn find_by_id(&self, category_id: i32) -> Result<Option<FinanceCategory>, DbErr> {
        let entity = entity::prelude::FinanceCategory::find_by_id(category_id)
            .one(self.db)
            .await?;

        Ok(entity.map(FinanceCategory::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<FinanceCategory>, DbErr> {
        let categories = entity::prelude::FinanceCategory::find()
            .order_by_asc(entity::finance_category::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(FinanceCategory::from_entity)
            .collect();

        Ok(categories)
    }

    pub async fn update(
        &self,
        category_id: i32,
        name: String,
        kind: CategoryKind,
    ) -> Result<Option<FinanceCategory>, DbErr> {
        let Some(existing) = entity::prelude::FinanceCategory::find_by_id(category_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::finance_category::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);
        active.kind = ActiveValue::Set(kind);

        let updated = entity::prelude::FinanceCategory::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(FinanceCategory::from_entity(updated)))
    }

    pub async fn delete(&self, category_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FinanceCategory::delete_by_id(category_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

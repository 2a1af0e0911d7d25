//! Counterparty data repository.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::finance::Counterparty;

/// Repository providing database operations for counterparties.
pub struct CounterpartyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CounterpartyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, note: Option<String>) -> Result<Counterparty, DbErr> {
        let entity = entity::prelude::Counterparty::insert(entity::counterparty::ActiveModel {
            name: ActiveValue::Set(name),
            note: ActiveValue::Set(note),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Counterparty::from_entity(entity))
    }

    pub async fn find_by_id(&self, counterparty_id: i32) -> Result<Option<Counterparty>, DbErr> {
        let entity = entity::prelude::Counterparty::find_by_id(counterparty_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Counterparty::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Counterparty>, DbErr> {
        let counterparties = entity::prelude::Counterparty::find()
            .order_by_asc(entity::counterparty::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Counterparty::from_entity)
            .collect();

        Ok(counterparties)
    }

    pub async fn update(
        &self,
        counterparty_id: i32,
        name: String,
        note: Option<String>,
    ) -> Result<Option<Counterparty>, DbErr> {
        let Some(existing) = entity::prelude::Counterparty::find_by_id(counterparty_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::counterparty::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);
        active.note = ActiveValue::Set(note);

        let updated = entity::prelude::Counterparty::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(Counterparty::from_entity(updated)))
    }

    pub async fn delete(&self, counterparty_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Counterparty::delete_by_id(counterparty_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Finance account data repository.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::finance::FinanceAccount;

/// Repository providing database operations for finance accounts.
pub struct FinanceAccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceAccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, currency: String) -> Result<FinanceAccount, DbErr> {
        let entity =
            entity::prelude::FinanceAccount::insert(entity::finance_account::ActiveModel {
                name: ActiveValue::Set(name),
                currency: ActiveValue::Set(currency),
                archived: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?;

        Ok(FinanceAccount::from_entity(entity))
    }

    pub async fn find_by_id(&self, account_id: i32) -> Result<Option<FinanceAccount>, DbErr> {
        let entity = entity::prelude::FinanceAccount::find_by_id(account_id)
            .one(self.db)
            .await?;

        Ok(entity.map(FinanceAccount::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<FinanceAccount>, DbErr> {
        let accounts = entity::prelude::FinanceAccount::find()
            .order_by_asc(entity::finance_account::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(FinanceAccount::from_entity)
            .collect();

        Ok(accounts)
    }

    pub async fn update(
        &self,
        account_id: i32,
        name: String,
        currency: String,
        archived: bool,
    ) -> Result<Option<FinanceAccount>, DbErr> {
        let Some(existing) = entity::prelude::FinanceAccount::find_by_id(account_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::finance_account::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);
        active.currency = ActiveValue::Set(currency);
        active.archived = ActiveValue::Set(archived);

        let updated = entity::prelude::FinanceAccount::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(FinanceAccount::from_entity(updated)))
    }

    pub async fn delete(&self, account_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FinanceAccount::delete_by_id(account_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

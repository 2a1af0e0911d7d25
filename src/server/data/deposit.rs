//! Deposit data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::deposit::{CreateDepositParam, Deposit, DepositFilter};

/// Repository providing database operations for processed deposits.
pub struct DepositRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepositRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a deposit.
    pub async fn create(&self, param: CreateDepositParam) -> Result<Deposit, DbErr> {
        let entity = entity::prelude::Deposit::insert(entity::deposit::ActiveModel {
            processor_id: ActiveValue::Set(param.processor_id),
            amount_cents: ActiveValue::Set(param.amount_cents),
            deposited_at: ActiveValue::Set(param.deposited_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Deposit::from_entity(entity))
    }

    /// Lists deposits matching the filter, oldest first.
    pub async fn list(&self, filter: DepositFilter) -> Result<Vec<Deposit>, DbErr> {
        let mut query = entity::prelude::Deposit::find();

        if let Some(processor_id) = filter.processor_id {
            query = query.filter(entity::deposit::Column::ProcessorId.eq(processor_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::deposit::Column::DepositedAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::deposit::Column::DepositedAt.lt(to));
        }

        let deposits = query
            .order_by_asc(entity::deposit::Column::DepositedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Deposit::from_entity)
            .collect();

        Ok(deposits)
    }

    /// Lists a processor's deposits within `[from, to)`, oldest first.
    ///
    /// Used by the bonus report to aggregate one calendar month.
    pub async fn list_for_window(
        &self,
        processor_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Deposit>, DbErr> {
        self.list(DepositFilter {
            processor_id: Some(processor_id),
            from: Some(from),
            to: Some(to),
        })
        .await
    }
}

//! Finance transaction data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};

use crate::server::model::finance::{
    FinanceTransaction, PaginatedTransactions, TransactionFilter, UpsertTransactionParam,
};

/// Repository providing database operations for finance transactions.
pub struct FinanceTransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceTransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertTransactionParam) -> Result<FinanceTransaction, DbErr> {
        let entity =
            entity::prelude::FinanceTransaction::insert(entity::finance_transaction::ActiveModel {
                account_id: ActiveValue::Set(param.account_id),
                category_id: ActiveValue::Set(param.category_id),
                counterparty_id: ActiveValue::Set(param.counterparty_id),
                amount_cents: ActiveValue::Set(param.amount_cents),
                occurred_at: ActiveValue::Set(param.occurred_at),
                note: ActiveValue::Set(param.note),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?;

        Ok(FinanceTransaction::from_entity(entity))
    }

    pub async fn find_by_id(&self, tx_id: i32) -> Result<Option<FinanceTransaction>, DbErr> {
        let entity = entity::prelude::FinanceTransaction::find_by_id(tx_id)
            .one(self.db)
            .await?;

        Ok(entity.map(FinanceTransaction::from_entity))
    }

    /// Lists transactions matching the filter, newest first, paginated.
    pub async fn list_paginated(
        &self,
        filter: TransactionFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedTransactions, DbErr> {
        let paginator = Self::apply_filter(entity::prelude::FinanceTransaction::find(), &filter)
            .order_by_desc(entity::finance_transaction::Column::OccurredAt)
            .order_by_desc(entity::finance_transaction::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let transactions = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(FinanceTransaction::from_entity)
            .collect();

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedTransactions {
            transactions,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Lists every transaction up to an optional end bound, for report
    /// aggregation. Account balances need the full history, so there is no
    /// lower bound here; the service applies the window to category totals.
    pub async fn list_until(
        &self,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<FinanceTransaction>, DbErr> {
        let mut query = entity::prelude::FinanceTransaction::find();

        if let Some(to) = to {
            query = query.filter(entity::finance_transaction::Column::OccurredAt.lt(to));
        }

        let transactions = query
            .order_by_asc(entity::finance_transaction::Column::OccurredAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(FinanceTransaction::from_entity)
            .collect();

        Ok(transactions)
    }

    /// Counts transactions referencing an account.
    ///
    /// Used to refuse deleting accounts with history.
    pub async fn count_by_account(&self, account_id: i32) -> Result<u64, DbErr> {
        entity::prelude::FinanceTransaction::find()
            .filter(entity::finance_transaction::Column::AccountId.eq(account_id))
            .count(self.db)
            .await
    }

    pub async fn update(
        &self,
        tx_id: i32,
        param: UpsertTransactionParam,
    ) -> Result<Option<FinanceTransaction>, DbErr> {
        let Some(existing) = entity::prelude::FinanceTransaction::find_by_id(tx_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::finance_transaction::ActiveModel = existing.into();
        active.account_id = ActiveValue::Set(param.account_id);
        active.category_id = ActiveValue::Set(param.category_id);
        active.counterparty_id = ActiveValue::Set(param.counterparty_id);
        active.amount_cents = ActiveValue::Set(param.amount_cents);
        active.occurred_at = ActiveValue::Set(param.occurred_at);
        active.note = ActiveValue::Set(param.note);

        let updated = entity::prelude::FinanceTransaction::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(FinanceTransaction::from_entity(updated)))
    }

    pub async fn delete(&self, tx_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FinanceTransaction::delete_by_id(tx_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn apply_filter(
        mut query: Select<entity::prelude::FinanceTransaction>,
        filter: &TransactionFilter,
    ) -> Select<entity::prelude::FinanceTransaction> {
        if let Some(account_id) = filter.account_id {
            query = query.filter(entity::finance_transaction::Column::AccountId.eq(account_id));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::finance_transaction::Column::CategoryId.eq(category_id));
        }
        if let Some(counterparty_id) = filter.counterparty_id {
            query = query
                .filter(entity::finance_transaction::Column::CounterpartyId.eq(counterparty_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::finance_transaction::Column::OccurredAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::finance_transaction::Column::OccurredAt.lt(to));
        }

        query
    }
}

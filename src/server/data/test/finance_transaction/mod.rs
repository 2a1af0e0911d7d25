use crate::server::{
    data::finance_transaction::FinanceTransactionRepository,
    model::finance::{TransactionFilter, UpsertTransactionParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_account;
mod create;
mod list_paginated;
mod list_until;
mod update;

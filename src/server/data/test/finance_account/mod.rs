use crate::server::data::finance_account::FinanceAccountRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;

use crate::server::data::finance_category::FinanceCategoryRepository;
use entity::sea_orm_active_enums::CategoryKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

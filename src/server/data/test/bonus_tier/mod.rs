use crate::server::{data::bonus_tier::BonusTierRepository, model::bonus::UpsertBonusTierParam};
use entity::sea_orm_active_enums::TierPeriod;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_period;
mod update;

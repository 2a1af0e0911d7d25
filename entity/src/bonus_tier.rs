use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::TierPeriod;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bonus_tier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub period: TierPeriod,
    pub min_cents: i64,
    pub max_cents: Option<i64>,
    pub percent_bps: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

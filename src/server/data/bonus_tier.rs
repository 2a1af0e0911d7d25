//! Bonus grid data repository for database operations.

use entity::sea_orm_active_enums::TierPeriod;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::bonus::{BonusTier, UpsertBonusTierParam};

/// Repository providing database operations for the bonus grid.
pub struct BonusTierRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BonusTierRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: UpsertBonusTierParam) -> Result<BonusTier, DbErr> {
        let entity = entity::prelude::BonusTier::insert(entity::bonus_tier::ActiveModel {
            period: ActiveValue::Set(param.period),
            min_cents: ActiveValue::Set(param.min_cents),
            max_cents: ActiveValue::Set(param.max_cents),
            percent_bps: ActiveValue::Set(param.percent_bps),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(BonusTier::from_entity(entity))
    }

    pub async fn find_by_id(&self, tier_id: i32) -> Result<Option<BonusTier>, DbErr> {
        let entity = entity::prelude::BonusTier::find_by_id(tier_id)
            .one(self.db)
            .await?;

        Ok(entity.map(BonusTier::from_entity))
    }

    /// Returns the whole grid ordered by period then range start.
    pub async fn get_all(&self) -> Result<Vec<BonusTier>, DbErr> {
        let tiers = entity::prelude::BonusTier::find()
            .order_by_asc(entity::bonus_tier::Column::Period)
            .order_by_asc(entity::bonus_tier::Column::MinCents)
            .all(self.db)
            .await?
            .into_iter()
            .map(BonusTier::from_entity)
            .collect();

        Ok(tiers)
    }

    /// Returns all tiers for one accumulation window, ordered by range start.
    pub async fn get_by_period(&self, period: TierPeriod) -> Result<Vec<BonusTier>, DbErr> {
        let tiers = entity::prelude::BonusTier::find()
            .filter(entity::bonus_tier::Column::Period.eq(period))
            .order_by_asc(entity::bonus_tier::Column::MinCents)
            .all(self.db)
            .await?
            .into_iter()
            .map(BonusTier::from_entity)
            .collect();

        Ok(tiers)
    }

    /// Replaces a tier's fields.
    pub async fn update(
        &self,
        tier_id: i32,
        param: UpsertBonusTierParam,
    ) -> Result<Option<BonusTier>, DbErr> {
        let Some(existing) = entity::prelude::BonusTier::find_by_id(tier_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::bonus_tier::ActiveModel = existing.into();
        active.period = ActiveValue::Set(param.period);
        active.min_cents = ActiveValue::Set(param.min_cents);
        active.max_cents = ActiveValue::Set(param.max_cents);
        active.percent_bps = ActiveValue::Set(param.percent_bps);

        let updated = entity::prelude::BonusTier::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(BonusTier::from_entity(updated)))
    }

    pub async fn delete(&self, tier_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BonusTier::delete_by_id(tier_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

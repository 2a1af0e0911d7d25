//! Bonus grid domain models and parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::TierPeriod;
use rust_decimal::Decimal;

use crate::model::bonus::{
    BonusReportDayDto, BonusReportDto, BonusTierDto, TierPeriodDto,
};

/// One row of the bonus grid: a cumulative `[min, max)` range in cents mapped
/// to a percentage in basis points, scoped to a daily or monthly window.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusTier {
    pub id: i32,
    pub period: TierPeriod,
    pub min_cents: i64,
    pub max_cents: Option<i64>,
    pub percent_bps: i32,
}

impl BonusTier {
    pub fn into_dto(self) -> BonusTierDto {
        BonusTierDto {
            id: self.id,
            period: period_to_dto(self.period),
            min_cents: self.min_cents,
            max_cents: self.max_cents,
            percent_bps: self.percent_bps,
        }
    }

    pub fn from_entity(entity: entity::bonus_tier::Model) -> Self {
        Self {
            id: entity.id,
            period: entity.period,
            min_cents: entity.min_cents,
            max_cents: entity.max_cents,
            percent_bps: entity.percent_bps,
        }
    }

    /// Whether the cumulative amount falls inside this tier's `[min, max)` range.
    pub fn contains(&self, amount_cents: i64) -> bool {
        amount_cents >= self.min_cents && self.max_cents.is_none_or(|max| amount_cents < max)
    }
}

pub fn period_to_dto(period: TierPeriod) -> TierPeriodDto {
    match period {
        TierPeriod::Daily => TierPeriodDto::Daily,
        TierPeriod::Monthly => TierPeriodDto::Monthly,
    }
}

pub fn period_from_dto(period: TierPeriodDto) -> TierPeriod {
    match period {
        TierPeriodDto::Daily => TierPeriod::Daily,
        TierPeriodDto::Monthly => TierPeriod::Monthly,
    }
}

/// Parameters for creating or replacing a bonus tier.
#[derive(Debug, Clone)]
pub struct UpsertBonusTierParam {
    pub period: TierPeriod,
    pub min_cents: i64,
    pub max_cents: Option<i64>,
    pub percent_bps: i32,
}

/// One calendar day of a processor's monthly bonus report.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusReportDay {
    pub date: NaiveDate,
    pub total_cents: i64,
    pub cumulative_cents: i64,
    pub percent_bps: i32,
    pub bonus: Decimal,
}

/// A processor's bonus report for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusReport {
    pub processor_id: i32,
    pub year: i32,
    pub month: u32,
    pub days: Vec<BonusReportDay>,
    pub month_total_cents: i64,
    pub monthly_percent_bps: i32,
    pub monthly_bonus: Decimal,
    pub total_bonus: Decimal,
}

impl BonusReport {
    pub fn into_dto(self) -> BonusReportDto {
        BonusReportDto {
            processor_id: self.processor_id,
            year: self.year,
            month: self.month,
            days: self
                .days
                .into_iter()
                .map(|d| BonusReportDayDto {
                    date: d.date,
                    total_cents: d.total_cents,
                    cumulative_cents: d.cumulative_cents,
                    percent_bps: d.percent_bps,
                    bonus: d.bonus,
                })
                .collect(),
            month_total_cents: self.month_total_cents,
            monthly_percent_bps: self.monthly_percent_bps,
            monthly_bonus: self.monthly_bonus,
            total_bonus: self.total_bonus,
        }
    }
}

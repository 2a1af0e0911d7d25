use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accumulation window a tier applies to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TierPeriodDto {
    Daily,
    Monthly,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BonusTierDto {
    pub id: i32,
    pub period: TierPeriodDto,
    /// Inclusive lower bound of the cumulative range, in cents.
    pub min_cents: i64,
    /// Exclusive upper bound in cents; `null` means unbounded.
    pub max_cents: Option<i64>,
    /// Bonus percentage in basis points (50 = 0.5%).
    pub percent_bps: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateBonusTierDto {
    pub period: TierPeriodDto,
    pub min_cents: i64,
    pub max_cents: Option<i64>,
    pub percent_bps: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateBonusTierDto {
    pub period: TierPeriodDto,
    pub min_cents: i64,
    pub max_cents: Option<i64>,
    pub percent_bps: i32,
}

/// One calendar day of a processor's monthly bonus report.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BonusReportDayDto {
    pub date: NaiveDate,
    /// Total deposited this day, in cents.
    pub total_cents: i64,
    /// Running month total through this day, in cents.
    pub cumulative_cents: i64,
    /// Matched daily tier percentage in basis points.
    pub percent_bps: i32,
    /// Bonus earned for this day, in whole currency units.
    pub bonus: Decimal,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BonusReportDto {
    pub processor_id: i32,
    pub year: i32,
    pub month: u32,
    pub days: Vec<BonusReportDayDto>,
    pub month_total_cents: i64,
    /// Matched monthly tier percentage in basis points.
    pub monthly_percent_bps: i32,
    pub monthly_bonus: Decimal,
    /// Sum of daily bonuses plus the monthly bonus.
    pub total_bonus: Decimal,
}

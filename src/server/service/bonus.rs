//! Bonus grid service.
//!
//! Manages the progressive bonus grid and assembles monthly bonus reports for
//! deposit processors. The grid is a set of `[min, max)` ranges in cents, each
//! mapped to a percentage in basis points, scoped to a daily or monthly
//! accumulation window. When ranges overlap, the highest percentage wins.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use entity::sea_orm_active_enums::TierPeriod;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

use crate::server::{
    data::{bonus_tier::BonusTierRepository, deposit::DepositRepository},
    error::{auth::AuthError, AppError},
    model::{
        bonus::{BonusReport, BonusReportDay, BonusTier, UpsertBonusTierParam},
        user::User,
    },
};

/// Service handling bonus grid administration and report assembly.
pub struct BonusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BonusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the whole bonus grid ordered by period then range start.
    pub async fn get_tiers(&self) -> Result<Vec<BonusTier>, AppError> {
        let tiers = BonusTierRepository::new(self.db).get_all().await?;

        Ok(tiers)
    }

    /// Creates a bonus tier.
    ///
    /// # Returns
    /// - `Ok(BonusTier)` - The created tier
    /// - `Err(AppError::BadRequest)` - Invalid range or negative percentage
    pub async fn create_tier(&self, param: UpsertBonusTierParam) -> Result<BonusTier, AppError> {
        validate_tier(&param)?;

        let tier = BonusTierRepository::new(self.db).create(param).await?;

        Ok(tier)
    }

    /// Replaces a tier's fields.
    ///
    /// # Returns
    /// - `Ok(BonusTier)` - Updated tier
    /// - `Err(AppError::BadRequest)` - Invalid range or negative percentage
    /// - `Err(AppError::NotFound)` - No tier with that id
    pub async fn update_tier(
        &self,
        tier_id: i32,
        param: UpsertBonusTierParam,
    ) -> Result<BonusTier, AppError> {
        validate_tier(&param)?;

        let tier = BonusTierRepository::new(self.db)
            .update(tier_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Bonus tier not found".to_string()))?;

        Ok(tier)
    }

    /// Deletes a tier.
    pub async fn delete_tier(&self, tier_id: i32) -> Result<(), AppError> {
        let deleted = BonusTierRepository::new(self.db).delete(tier_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Bonus tier not found".to_string()));
        }

        Ok(())
    }

    /// Builds a processor's bonus report for one calendar month.
    ///
    /// Each day with deposits gets a row: the day's total, the cumulative month
    /// total through that day, the daily tier percentage matched against the
    /// day's total, and the resulting bonus. The monthly tier is matched against
    /// the whole month's total; the report total is the sum of all daily bonuses
    /// plus the monthly bonus.
    ///
    /// Processors may only request their own report.
    ///
    /// # Returns
    /// - `Ok(BonusReport)` - Assembled report
    /// - `Err(AppError::BadRequest)` - Month outside 1..=12 or an invalid year
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-admin requesting another
    ///   processor's report
    pub async fn monthly_report(
        &self,
        caller: &User,
        processor_id: i32,
        year: i32,
        month: u32,
    ) -> Result<BonusReport, AppError> {
        if !caller.is_admin() && processor_id != caller.id {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to read the bonus report of user {processor_id}"),
            )
            .into());
        }

        let (from, to) = month_window(year, month)?;

        let tier_repo = BonusTierRepository::new(self.db);
        let daily_tiers = tier_repo.get_by_period(TierPeriod::Daily).await?;
        let monthly_tiers = tier_repo.get_by_period(TierPeriod::Monthly).await?;

        let deposits = DepositRepository::new(self.db)
            .list_for_window(processor_id, from, to)
            .await?;

        let mut day_totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for deposit in &deposits {
            *day_totals
                .entry(deposit.deposited_at.date_naive())
                .or_default() += deposit.amount_cents;
        }

        let mut days = Vec::with_capacity(day_totals.len());
        let mut cumulative_cents = 0i64;
        let mut daily_bonus_total = Decimal::ZERO;

        for (date, total_cents) in day_totals {
            cumulative_cents += total_cents;
            let percent_bps = tier_percent(&daily_tiers, total_cents);
            let bonus = bonus_amount(total_cents, percent_bps);
            daily_bonus_total += bonus;

            days.push(BonusReportDay {
                date,
                total_cents,
                cumulative_cents,
                percent_bps,
                bonus,
            });
        }

        let month_total_cents = cumulative_cents;
        let monthly_percent_bps = tier_percent(&monthly_tiers, month_total_cents);
        let monthly_bonus = bonus_amount(month_total_cents, monthly_percent_bps);

        Ok(BonusReport {
            processor_id,
            year,
            month,
            days,
            month_total_cents,
            monthly_percent_bps,
            monthly_bonus,
            total_bonus: daily_bonus_total + monthly_bonus,
        })
    }
}

/// Selects the percentage for a cumulative amount from a period's tiers.
///
/// The highest percentage among tiers whose `[min, max)` range contains the
/// amount wins; no matching tier means no bonus.
pub fn tier_percent(tiers: &[BonusTier], amount_cents: i64) -> i32 {
    tiers
        .iter()
        .filter(|tier| tier.contains(amount_cents))
        .map(|tier| tier.percent_bps)
        .max()
        .unwrap_or(0)
}

/// Computes a bonus in currency units from an amount in cents and a percentage
/// in basis points, rounded to cents half away from zero.
pub fn bonus_amount(amount_cents: i64, percent_bps: i32) -> Decimal {
    let amount = Decimal::new(amount_cents, 2);
    let rate = Decimal::new(percent_bps as i64, 4);

    (amount * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_tier(param: &UpsertBonusTierParam) -> Result<(), AppError> {
    if param.min_cents < 0 {
        return Err(AppError::BadRequest(
            "Tier minimum must not be negative".to_string(),
        ));
    }

    if let Some(max_cents) = param.max_cents {
        if max_cents <= param.min_cents {
            return Err(AppError::BadRequest(
                "Tier maximum must be greater than its minimum".to_string(),
            ));
        }
    }

    if param.percent_bps < 0 {
        return Err(AppError::BadRequest(
            "Tier percentage must not be negative".to_string(),
        ));
    }

    Ok(())
}

/// UTC window `[first day of month, first day of next month)`.
fn month_window(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest("Invalid year or month".to_string()))?;

    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::BadRequest("Invalid year or month".to_string()))?;

    let from = Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap_or_default());
    let to = Utc.from_utc_datetime(&end.and_hms_opt(0, 0, 0).unwrap_or_default());

    Ok((from, to))
}

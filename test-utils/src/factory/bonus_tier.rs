//! Bonus tier factory for creating test bonus tier entities.

use entity::sea_orm_active_enums::TierPeriod;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bonus tiers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bonus_tier::BonusTierFactory;
/// use entity::sea_orm_active_enums::TierPeriod;
///
/// let tier = BonusTierFactory::new(&db)
///     .period(TierPeriod::Monthly)
///     .min_cents(100_000)
///     .max_cents(None)
///     .percent_bps(500)
///     .build()
///     .await?;
/// ```
pub struct BonusTierFactory<'a> {
    db: &'a DatabaseConnection,
    period: TierPeriod,
    min_cents: i64,
    max_cents: Option<i64>,
    percent_bps: i32,
}

impl<'a> BonusTierFactory<'a> {
    /// Creates a new BonusTierFactory with default values.
    ///
    /// Defaults:
    /// - period: `TierPeriod::Daily`
    /// - min_cents: `0`
    /// - max_cents: `None` (unbounded)
    /// - percent_bps: `100` (1%)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            period: TierPeriod::Daily,
            min_cents: 0,
            max_cents: None,
            percent_bps: 100,
        }
    }

    /// Sets the accumulation period the tier applies to.
    pub fn period(mut self, period: TierPeriod) -> Self {
        self.period = period;
        self
    }

    /// Sets the inclusive lower bound in cents.
    pub fn min_cents(mut self, min_cents: i64) -> Self {
        self.min_cents = min_cents;
        self
    }

    /// Sets the exclusive upper bound in cents.
    pub fn max_cents(mut self, max_cents: Option<i64>) -> Self {
        self.max_cents = max_cents;
        self
    }

    /// Sets the bonus rate in basis points.
    pub fn percent_bps(mut self, percent_bps: i32) -> Self {
        self.percent_bps = percent_bps;
        self
    }

    /// Builds and inserts the bonus tier entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bonus_tier::Model)` - Created bonus tier entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bonus_tier::Model, DbErr> {
        entity::bonus_tier::ActiveModel {
            id: ActiveValue::NotSet,
            period: ActiveValue::Set(self.period),
            min_cents: ActiveValue::Set(self.min_cents),
            max_cents: ActiveValue::Set(self.max_cents),
            percent_bps: ActiveValue::Set(self.percent_bps),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a daily bonus tier with the given bounds and rate.
///
/// # Arguments
/// - `db` - Database connection
/// - `min_cents` - Inclusive lower bound in cents
/// - `max_cents` - Exclusive upper bound in cents, `None` for unbounded
/// - `percent_bps` - Bonus rate in basis points
///
/// # Returns
/// - `Ok(entity::bonus_tier::Model)` - Created bonus tier entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_daily_tier(
    db: &DatabaseConnection,
    min_cents: i64,
    max_cents: Option<i64>,
    percent_bps: i32,
) -> Result<entity::bonus_tier::Model, DbErr> {
    BonusTierFactory::new(db)
        .min_cents(min_cents)
        .max_cents(max_cents)
        .percent_bps(percent_bps)
        .build()
        .await
}

/// Creates a monthly bonus tier with the given bounds and rate.
///
/// # Arguments
/// - `db` - Database connection
/// - `min_cents` - Inclusive lower bound in cents
/// - `max_cents` - Exclusive upper bound in cents, `None` for unbounded
/// - `percent_bps` - Bonus rate in basis points
///
/// # Returns
/// - `Ok(entity::bonus_tier::Model)` - Created bonus tier entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_monthly_tier(
    db: &DatabaseConnection,
    min_cents: i64,
    max_cents: Option<i64>,
    percent_bps: i32,
) -> Result<entity::bonus_tier::Model, DbErr> {
    BonusTierFactory::new(db)
        .period(TierPeriod::Monthly)
        .min_cents(min_cents)
        .max_cents(max_cents)
        .percent_bps(percent_bps)
        .build()
        .await
}

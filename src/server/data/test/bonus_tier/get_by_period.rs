use super::*;

/// Tests fetching tiers for one accumulation window.
///
/// Verifies that tiers of the other period are excluded and results are
/// ordered by range start.
///
/// Expected: Ok with only daily tiers in ascending min order
#[tokio::test]
async fn returns_only_requested_period_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BonusTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let high = factory::bonus_tier::create_daily_tier(db, 100_000, None, 300).await?;
    let low = factory::bonus_tier::create_daily_tier(db, 0, Some(100_000), 100).await?;
    factory::bonus_tier::create_monthly_tier(db, 0, None, 50).await?;

    let repo = BonusTierRepository::new(db);
    let tiers = repo.get_by_period(TierPeriod::Daily).await?;

    let ids: Vec<i32> = tiers.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![low.id, high.id]);

    Ok(())
}

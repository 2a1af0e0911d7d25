use super::*;

/// Tests creating a bonus tier.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BonusTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BonusTierRepository::new(db);
    let tier = repo
        .create(UpsertBonusTierParam {
            period: TierPeriod::Daily,
            min_cents: 50_000,
            max_cents: Some(100_000),
            percent_bps: 150,
        })
        .await?;

    assert_eq!(tier.period, TierPeriod::Daily);
    assert_eq!(tier.min_cents, 50_000);
    assert_eq!(tier.max_cents, Some(100_000));
    assert_eq!(tier.percent_bps, 150);

    Ok(())
}

/// Tests creating an unbounded tier.
///
/// Expected: Ok with max_cents stored as None
#[tokio::test]
async fn creates_unbounded_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BonusTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BonusTierRepository::new(db);
    let tier = repo
        .create(UpsertBonusTierParam {
            period: TierPeriod::Monthly,
            min_cents: 1_000_000,
            max_cents: None,
            percent_bps: 500,
        })
        .await?;

    assert_eq!(tier.max_cents, None);

    Ok(())
}

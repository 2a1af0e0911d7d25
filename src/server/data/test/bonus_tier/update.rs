use super::*;

/// Tests replacing a tier's fields.
///
/// Expected: Ok(Some(tier)) with the new range and rate
#[tokio::test]
async fn replaces_tier_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BonusTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tier = factory::bonus_tier::create_daily_tier(db, 0, Some(50_000), 100).await?;

    let repo = BonusTierRepository::new(db);
    let updated = repo
        .update(
            tier.id,
            UpsertBonusTierParam {
                period: TierPeriod::Monthly,
                min_cents: 25_000,
                max_cents: None,
                percent_bps: 250,
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.period, TierPeriod::Monthly);
    assert_eq!(updated.min_cents, 25_000);
    assert_eq!(updated.max_cents, None);
    assert_eq!(updated.percent_bps, 250);

    Ok(())
}

/// Tests updating a tier that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BonusTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BonusTierRepository::new(db);
    let updated = repo
        .update(
            999,
            UpsertBonusTierParam {
                period: TierPeriod::Daily,
                min_cents: 0,
                max_cents: None,
                percent_bps: 100,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

use super::*;

/// Tests deleting a tier.
///
/// Expected: Ok(true) with the row removed
#[tokio::test]
async fn deletes_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BonusTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tier = factory::bonus_tier::create_daily_tier(db, 0, None, 100).await?;

    let repo = BonusTierRepository::new(db);
    assert!(repo.delete(tier.id).await?);
    assert!(repo.find_by_id(tier.id).await?.is_none());

    Ok(())
}

/// Tests deleting a tier that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BonusTier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BonusTierRepository::new(db);
    assert!(!repo.delete(999).await?);

    Ok(())
}

use super::*;

/// Tests renaming and archiving an account.
///
/// Expected: Ok(Some(account)) with the new fields
#[tokio::test]
async fn updates_and_archives_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;

    let repo = FinanceAccountRepository::new(db);
    let updated = repo
        .update(account.id, "Old Cash".to_string(), "EUR".to_string(), true)
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Old Cash");
    assert_eq!(updated.currency, "EUR");
    assert!(updated.archived);

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceAccountRepository::new(db);
    let updated = repo
        .update(999, "Ghost".to_string(), "USD".to_string(), false)
        .await?;

    assert!(updated.is_none());

    Ok(())
}

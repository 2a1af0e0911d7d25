use super::*;

/// Tests creating a finance account.
///
/// New accounts always start active.
///
/// Expected: Ok with name and currency persisted, archived false
#[tokio::test]
async fn creates_active_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceAccountRepository::new(db);
    let account = repo
        .create("Main Cash".to_string(), "USD".to_string())
        .await?;

    assert_eq!(account.name, "Main Cash");
    assert_eq!(account.currency, "USD");
    assert!(!account.archived);

    Ok(())
}

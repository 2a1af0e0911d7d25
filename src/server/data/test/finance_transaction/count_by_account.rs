use super::*;

/// Tests counting an account's transaction history.
///
/// The count backs the rule that accounts with history cannot be deleted.
///
/// Expected: Ok with the per-account count
#[tokio::test]
async fn counts_only_that_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    let other = factory::finance_account::create_account(db).await?;

    factory::finance_transaction::create_transaction(db, account.id, 1_000).await?;
    factory::finance_transaction::create_transaction(db, account.id, 2_000).await?;
    factory::finance_transaction::create_transaction(db, other.id, 3_000).await?;

    let repo = FinanceTransactionRepository::new(db);
    assert_eq!(repo.count_by_account(account.id).await?, 2);
    assert_eq!(repo.count_by_account(other.id).await?, 1);
    assert_eq!(repo.count_by_account(999).await?, 0);

    Ok(())
}

use super::*;

/// Tests the report feed listing.
///
/// Verifies that only transactions before the end bound are returned, in
/// ascending occurrence order.
///
/// Expected: Ok with rows before the bound, oldest first
#[tokio::test]
async fn lists_up_to_bound_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    let now = Utc::now();

    let old = factory::finance_transaction::FinanceTransactionFactory::new(db, account.id)
        .occurred_at(now - Duration::days(10))
        .build()
        .await?;
    let recent = factory::finance_transaction::FinanceTransactionFactory::new(db, account.id)
        .occurred_at(now - Duration::days(2))
        .build()
        .await?;
    // After the bound
    factory::finance_transaction::FinanceTransactionFactory::new(db, account.id)
        .occurred_at(now)
        .build()
        .await?;

    let repo = FinanceTransactionRepository::new(db);
    let transactions = repo.list_until(Some(now - Duration::days(1))).await?;

    let ids: Vec<i32> = transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![old.id, recent.id]);

    Ok(())
}

/// Tests the unbounded listing used for full-history balances.
///
/// Expected: Ok with every transaction
#[tokio::test]
async fn lists_everything_without_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    for _ in 0..3 {
        factory::finance_transaction::create_transaction(db, account.id, 1_000).await?;
    }

    let repo = FinanceTransactionRepository::new(db);
    let transactions = repo.list_until(None).await?;

    assert_eq!(transactions.len(), 3);

    Ok(())
}

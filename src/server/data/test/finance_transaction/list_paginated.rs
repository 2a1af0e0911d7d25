use super::*;

/// Tests paginating the transaction list.
///
/// Verifies page contents, totals, and newest-first ordering by occurrence
/// timestamp.
///
/// Expected: Ok with correct pages and descending order
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    let now = Utc::now();

    let mut ids = Vec::new();
    for i in 0..5 {
        let tx = factory::finance_transaction::FinanceTransactionFactory::new(db, account.id)
            .occurred_at(now - Duration::days(i))
            .build()
            .await?;
        ids.push(tx.id);
    }

    let repo = FinanceTransactionRepository::new(db);
    let page = repo.list_paginated(TransactionFilter::default(), 0, 2).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.transactions.len(), 2);
    // Newest (smallest offset from now) first
    assert_eq!(page.transactions[0].id, ids[0]);
    assert_eq!(page.transactions[1].id, ids[1]);

    Ok(())
}

/// Tests filtering transactions by account and category.
///
/// Expected: Ok with only matching rows
#[tokio::test]
async fn filters_by_account_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    let other_account = factory::finance_account::create_account(db).await?;
    let category = factory::finance_category::create_category(
        db,
        entity::sea_orm_active_enums::CategoryKind::Income,
    )
    .await?;

    let matching = factory::finance_transaction::FinanceTransactionFactory::new(db, account.id)
        .category_id(Some(category.id))
        .build()
        .await?;
    factory::finance_transaction::create_transaction(db, account.id, 5_000).await?;
    factory::finance_transaction::create_transaction(db, other_account.id, 5_000).await?;

    let repo = FinanceTransactionRepository::new(db);
    let page = repo
        .list_paginated(
            TransactionFilter {
                account_id: Some(account.id),
                category_id: Some(category.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.transactions[0].id, matching.id);

    Ok(())
}

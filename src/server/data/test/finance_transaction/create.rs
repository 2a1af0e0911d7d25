use super::*;

/// Tests recording a transaction with category and counterparty links.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_linked_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    let category = factory::finance_category::create_category(
        db,
        entity::sea_orm_active_enums::CategoryKind::Income,
    )
    .await?;
    let counterparty = factory::counterparty::create_counterparty(db).await?;
    let occurred_at = Utc::now();

    let repo = FinanceTransactionRepository::new(db);
    let tx = repo
        .create(UpsertTransactionParam {
            account_id: account.id,
            category_id: Some(category.id),
            counterparty_id: Some(counterparty.id),
            amount_cents: 75_000,
            occurred_at,
            note: Some("client payment".to_string()),
        })
        .await?;

    assert_eq!(tx.account_id, account.id);
    assert_eq!(tx.category_id, Some(category.id));
    assert_eq!(tx.counterparty_id, Some(counterparty.id));
    assert_eq!(tx.amount_cents, 75_000);
    assert_eq!(tx.note.as_deref(), Some("client payment"));

    Ok(())
}

/// Tests recording an expense without optional links.
///
/// Expected: Ok with a negative amount and no category or counterparty
#[tokio::test]
async fn creates_bare_expense() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;

    let repo = FinanceTransactionRepository::new(db);
    let tx = repo
        .create(UpsertTransactionParam {
            account_id: account.id,
            category_id: None,
            counterparty_id: None,
            amount_cents: -4_200,
            occurred_at: Utc::now(),
            note: None,
        })
        .await?;

    assert_eq!(tx.amount_cents, -4_200);
    assert!(tx.category_id.is_none());
    assert!(tx.counterparty_id.is_none());

    Ok(())
}

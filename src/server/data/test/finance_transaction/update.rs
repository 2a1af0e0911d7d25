use super::*;

/// Tests replacing a transaction's fields.
///
/// Expected: Ok(Some(transaction)) with the new amount and links
#[tokio::test]
async fn replaces_transaction_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, category, _, tx) =
        factory::helpers::create_transaction_with_dependencies(db).await?;

    let occurred_at = Utc::now() - Duration::days(1);

    let repo = FinanceTransactionRepository::new(db);
    let updated = repo
        .update(
            tx.id,
            UpsertTransactionParam {
                account_id: account.id,
                category_id: Some(category.id),
                counterparty_id: None,
                amount_cents: 99_000,
                occurred_at,
                note: Some("corrected".to_string()),
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.amount_cents, 99_000);
    assert!(updated.counterparty_id.is_none());
    assert_eq!(updated.note.as_deref(), Some("corrected"));

    Ok(())
}

/// Tests deleting a transaction.
///
/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    let tx = factory::finance_transaction::create_transaction(db, account.id, 1_000).await?;

    let repo = FinanceTransactionRepository::new(db);
    assert!(repo.delete(tx.id).await?);
    assert!(repo.find_by_id(tx.id).await?.is_none());

    Ok(())
}

use super::*;

/// Tests changing a category's name and kind.
///
/// Expected: Ok(Some(category)) with the new fields
#[tokio::test]
async fn changes_name_and_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::finance_category::create_category(db, CategoryKind::Income).await?;

    let repo = FinanceCategoryRepository::new(db);
    let updated = repo
        .update(category.id, "Refunds".to_string(), CategoryKind::Expense)
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Refunds");
    assert_eq!(updated.kind, CategoryKind::Expense);

    Ok(())
}

/// Tests deleting a category.
///
/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::finance_category::create_category(db, CategoryKind::Expense).await?;

    let repo = FinanceCategoryRepository::new(db);
    assert!(repo.delete(category.id).await?);
    assert!(repo.find_by_id(category.id).await?.is_none());

    Ok(())
}

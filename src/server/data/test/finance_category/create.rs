use super::*;

/// Tests creating categories of both kinds.
///
/// Expected: Ok with name and kind persisted
#[tokio::test]
async fn creates_categories_of_both_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceCategoryRepository::new(db);
    let income = repo
        .create("Deposits".to_string(), CategoryKind::Income)
        .await?;
    let expense = repo
        .create("Rent".to_string(), CategoryKind::Expense)
        .await?;

    assert_eq!(income.kind, CategoryKind::Income);
    assert_eq!(expense.kind, CategoryKind::Expense);

    Ok(())
}

/// Tests listing categories ordered by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn lists_categories_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceCategoryRepository::new(db);
    repo.create("Salaries".to_string(), CategoryKind::Expense)
        .await?;
    repo.create("Deposits".to_string(), CategoryKind::Income)
        .await?;

    let categories = repo.get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Deposits", "Salaries"]);

    Ok(())
}

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::CategoryKind;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::finance::UpsertTransactionParam,
    service::finance::FinanceService,
};

/// Tests the report's window/balance split and its income/expense totals.
///
/// A transaction before the window start still counts toward the account
/// balance but not toward category or income totals.
///
/// Expected: balances are all-time sums, totals cover only the window
#[tokio::test]
async fn report_splits_window_totals_from_balances() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let checking = factory::finance_account::FinanceAccountFactory::new(db)
        .name("Checking")
        .build()
        .await?;
    let petty_cash = factory::finance_account::FinanceAccountFactory::new(db)
        .name("Petty cash")
        .build()
        .await?;

    let sales = factory::finance_category::FinanceCategoryFactory::new(db)
        .name("Sales")
        .kind(CategoryKind::Income)
        .build()
        .await?;
    let rent = factory::finance_category::FinanceCategoryFactory::new(db)
        .name("Rent")
        .kind(CategoryKind::Expense)
        .build()
        .await?;

    let from = Utc::now() - Duration::days(30);

    // Before the window: in the balance, not in the totals
    factory::finance_transaction::FinanceTransactionFactory::new(db, checking.id)
        .amount_cents(50_000)
        .category_id(Some(sales.id))
        .occurred_at(from - Duration::days(10))
        .build()
        .await?;

    factory::finance_transaction::FinanceTransactionFactory::new(db, checking.id)
        .amount_cents(20_000)
        .category_id(Some(sales.id))
        .occurred_at(from + Duration::days(1))
        .build()
        .await?;
    factory::finance_transaction::FinanceTransactionFactory::new(db, checking.id)
        .amount_cents(-5_000)
        .category_id(Some(rent.id))
        .occurred_at(from + Duration::days(2))
        .build()
        .await?;
    // Uncategorized expense on the other account
    factory::finance_transaction::FinanceTransactionFactory::new(db, petty_cash.id)
        .amount_cents(-10_000)
        .occurred_at(from + Duration::days(3))
        .build()
        .await?;

    let report = FinanceService::new(db).report(Some(from), None).await.unwrap();

    assert_eq!(report.income_total, Decimal::new(20_000, 2));
    assert_eq!(report.expense_total, Decimal::new(15_000, 2));
    assert_eq!(report.net, Decimal::new(5_000, 2));

    let balances: Vec<(&str, Decimal)> = report
        .accounts
        .iter()
        .map(|b| (b.account.name.as_str(), b.balance))
        .collect();
    assert!(balances.contains(&("Checking", Decimal::new(65_000, 2))));
    assert!(balances.contains(&("Petty cash", Decimal::new(-10_000, 2))));

    // Named categories alphabetically, uncategorized last
    let names: Vec<Option<&str>> = report
        .categories
        .iter()
        .map(|t| t.category.as_ref().map(|c| c.name.as_str()))
        .collect();
    assert_eq!(names, vec![Some("Rent"), Some("Sales"), None]);

    let rent_total = &report.categories[0];
    assert_eq!(rent_total.total, Decimal::new(-5_000, 2));
    let uncategorized = &report.categories[2];
    assert_eq!(uncategorized.total, Decimal::new(-10_000, 2));

    Ok(())
}

/// Tests that an open-ended report covers everything.
///
/// Expected: all transactions in both the totals and the balances
#[tokio::test]
async fn open_ended_report_covers_all_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    factory::finance_transaction::create_transaction(db, account.id, 30_000).await?;
    factory::finance_transaction::create_transaction(db, account.id, -12_500).await?;

    let report = FinanceService::new(db).report(None, None).await.unwrap();

    assert_eq!(report.income_total, Decimal::new(30_000, 2));
    assert_eq!(report.expense_total, Decimal::new(12_500, 2));
    assert_eq!(report.net, Decimal::new(17_500, 2));
    assert_eq!(report.accounts.len(), 1);
    assert_eq!(report.accounts[0].balance, Decimal::new(17_500, 2));

    Ok(())
}

/// Tests transaction validation: zero amounts and category sign mismatches.
///
/// Expected: Err(BadRequest) for both
#[tokio::test]
async fn create_transaction_validates_sign_and_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::finance_account::create_account(db).await?;
    let income = factory::finance_category::create_category(db, CategoryKind::Income).await?;

    let service = FinanceService::new(db);
    let param = |amount_cents: i64, category_id: Option<i32>| UpsertTransactionParam {
        account_id: account.id,
        category_id,
        counterparty_id: None,
        amount_cents,
        occurred_at: Utc::now(),
        note: None,
    };

    let zero = service.create_transaction(param(0, None)).await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    let mismatched = service
        .create_transaction(param(-4_000, Some(income.id)))
        .await;
    assert!(matches!(mismatched, Err(AppError::BadRequest(_))));

    let valid = service
        .create_transaction(param(4_000, Some(income.id)))
        .await
        .unwrap();
    assert_eq!(valid.amount_cents, 4_000);

    Ok(())
}

/// Tests that accounts with history cannot be deleted, only archived.
///
/// Expected: Err(BadRequest) with history, Ok once empty
#[tokio::test]
async fn delete_account_requires_empty_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let used = factory::finance_account::create_account(db).await?;
    let empty = factory::finance_account::create_account(db).await?;
    factory::finance_transaction::create_transaction(db, used.id, 1_000).await?;

    let service = FinanceService::new(db);

    let blocked = service.delete_account(used.id).await;
    assert!(matches!(blocked, Err(AppError::BadRequest(_))));

    assert!(service.delete_account(empty.id).await.is_ok());

    Ok(())
}

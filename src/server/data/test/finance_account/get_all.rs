use super::*;

/// Tests listing accounts ordered by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn orders_accounts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::finance_account::FinanceAccountFactory::new(db)
        .name("Wallet")
        .build()
        .await?;
    factory::finance_account::FinanceAccountFactory::new(db)
        .name("Bank")
        .build()
        .await?;

    let repo = FinanceAccountRepository::new(db);
    let accounts = repo.get_all().await?;

    let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Bank", "Wallet"]);

    Ok(())
}

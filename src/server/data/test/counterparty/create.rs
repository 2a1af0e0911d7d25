use super::*;

/// Tests creating a counterparty with and without a note.
///
/// Expected: Ok with fields persisted
#[tokio::test]
async fn creates_counterparty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterpartyRepository::new(db);
    let with_note = repo
        .create("Acme Corp".to_string(), Some("supplier".to_string()))
        .await?;
    let without_note = repo.create("John".to_string(), None).await?;

    assert_eq!(with_note.name, "Acme Corp");
    assert_eq!(with_note.note.as_deref(), Some("supplier"));
    assert!(without_note.note.is_none());

    Ok(())
}

/// Tests listing counterparties ordered by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn lists_counterparties_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::counterparty::CounterpartyFactory::new(db)
        .name("Zeta")
        .build()
        .await?;
    factory::counterparty::CounterpartyFactory::new(db)
        .name("Acme")
        .build()
        .await?;

    let repo = CounterpartyRepository::new(db);
    let counterparties = repo.get_all().await?;

    let names: Vec<&str> = counterparties.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Acme", "Zeta"]);

    Ok(())
}

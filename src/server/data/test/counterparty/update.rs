use super::*;

/// Tests changing a counterparty's name and clearing its note.
///
/// Expected: Ok(Some(counterparty)) with the new fields
#[tokio::test]
async fn changes_name_and_clears_note() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let counterparty = factory::counterparty::CounterpartyFactory::new(db)
        .note(Some("old note"))
        .build()
        .await?;

    let repo = CounterpartyRepository::new(db);
    let updated = repo
        .update(counterparty.id, "Renamed".to_string(), None)
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert!(updated.note.is_none());

    Ok(())
}

/// Tests deleting a counterparty.
///
/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_counterparty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let counterparty = factory::counterparty::create_counterparty(db).await?;

    let repo = CounterpartyRepository::new(db);
    assert!(repo.delete(counterparty.id).await?);
    assert!(repo.find_by_id(counterparty.id).await?.is_none());

    Ok(())
}

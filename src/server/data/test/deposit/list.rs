use super::*;

/// Tests listing deposits ordered oldest first.
///
/// Expected: Ok with deposits in ascending timestamp order
#[tokio::test]
async fn lists_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let processor = factory::user::create_user(db).await?;
    let now = Utc::now();

    let newest = factory::deposit::DepositFactory::new(db, processor.id)
        .deposited_at(now)
        .build()
        .await?;
    let oldest = factory::deposit::DepositFactory::new(db, processor.id)
        .deposited_at(now - Duration::days(2))
        .build()
        .await?;

    let repo = DepositRepository::new(db);
    let deposits = repo.list(DepositFilter::default()).await?;

    let ids: Vec<i32> = deposits.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![oldest.id, newest.id]);

    Ok(())
}

/// Tests filtering deposits by processor.
///
/// Expected: Ok with only the requested processor's deposits
#[tokio::test]
async fn filters_by_processor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let mine = factory::deposit::create_deposit(db, first.id, 10_000).await?;
    factory::deposit::create_deposit(db, second.id, 20_000).await?;

    let repo = DepositRepository::new(db);
    let deposits = repo
        .list(DepositFilter {
            processor_id: Some(first.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].id, mine.id);

    Ok(())
}

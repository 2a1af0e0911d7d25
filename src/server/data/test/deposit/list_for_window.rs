use super::*;

/// Tests the month-window listing used by the bonus report.
///
/// The lower bound is inclusive and the upper bound exclusive, so a deposit
/// exactly at the end of the window is not included.
///
/// Expected: Ok with only deposits inside `[from, to)`
#[tokio::test]
async fn respects_half_open_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let processor = factory::user::create_user(db).await?;
    let from = Utc::now() - Duration::days(30);
    let to = Utc::now();

    let at_start = factory::deposit::DepositFactory::new(db, processor.id)
        .deposited_at(from)
        .build()
        .await?;
    let inside = factory::deposit::DepositFactory::new(db, processor.id)
        .deposited_at(from + Duration::days(10))
        .build()
        .await?;
    // Exactly at the upper bound, excluded
    factory::deposit::DepositFactory::new(db, processor.id)
        .deposited_at(to)
        .build()
        .await?;
    // Before the window
    factory::deposit::DepositFactory::new(db, processor.id)
        .deposited_at(from - Duration::days(1))
        .build()
        .await?;

    let repo = DepositRepository::new(db);
    let deposits = repo.list_for_window(processor.id, from, to).await?;

    let ids: Vec<i32> = deposits.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![at_start.id, inside.id]);

    Ok(())
}

use super::*;

/// Tests listing shifts without a filter.
///
/// Verifies that all shifts are returned ordered newest first by start
/// timestamp.
///
/// Expected: Ok with shifts in descending start order
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let oldest = factory::shift::ShiftFactory::new(db, user.id)
        .started_at(now - Duration::days(2))
        .ended_at(Some(now - Duration::days(2) + Duration::hours(8)))
        .build()
        .await?;
    let newest = factory::shift::ShiftFactory::new(db, user.id)
        .started_at(now)
        .build()
        .await?;
    let middle = factory::shift::ShiftFactory::new(db, user.id)
        .started_at(now - Duration::days(1))
        .ended_at(Some(now - Duration::hours(16)))
        .build()
        .await?;

    let repo = ShiftRepository::new(db);
    let shifts = repo.list(ShiftFilter::default()).await?;

    let ids: Vec<i32> = shifts.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests filtering shifts by user and time window.
///
/// The window applies to the start timestamp with an inclusive lower and
/// exclusive upper bound.
///
/// Expected: Ok with only matching shifts
#[tokio::test]
async fn filters_by_user_and_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let now = Utc::now();

    let in_window = factory::shift::ShiftFactory::new(db, worker.id)
        .started_at(now - Duration::hours(12))
        .build()
        .await?;
    // Outside the window
    factory::shift::ShiftFactory::new(db, worker.id)
        .started_at(now - Duration::days(3))
        .ended_at(Some(now - Duration::days(3) + Duration::hours(8)))
        .build()
        .await?;
    // Different user inside the window
    factory::shift::ShiftFactory::new(db, other.id)
        .started_at(now - Duration::hours(6))
        .build()
        .await?;

    let repo = ShiftRepository::new(db);
    let shifts = repo
        .list(ShiftFilter {
            user_id: Some(worker.id),
            from: Some(now - Duration::days(1)),
            to: Some(now),
        })
        .await?;

    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].id, in_window.id);

    Ok(())
}

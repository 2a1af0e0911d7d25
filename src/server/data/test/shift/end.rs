use super::*;

/// Tests closing an open shift at a given timestamp.
///
/// Expected: Ok(Some(shift)) with ended_at set
#[tokio::test]
async fn closes_open_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let shift = factory::shift::create_shift(db, user.id).await?;
    let ended_at = Utc::now();

    let repo = ShiftRepository::new(db);
    let closed = repo.end(shift.id, ended_at).await?;

    assert!(closed.is_some());
    let closed = closed.unwrap();
    assert_eq!(closed.id, shift.id);
    assert_eq!(closed.ended_at, Some(ended_at));

    Ok(())
}

/// Tests closing a shift that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShiftRepository::new(db);
    let closed = repo.end(999, Utc::now()).await?;

    assert!(closed.is_none());

    Ok(())
}

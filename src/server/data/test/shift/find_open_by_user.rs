use super::*;

/// Tests finding a user's currently open shift.
///
/// Verifies that closed shifts are skipped and only the open one is
/// returned.
///
/// Expected: Ok(Some(shift)) for the open shift
#[tokio::test]
async fn finds_open_shift_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    // A closed shift earlier in the day
    factory::shift::ShiftFactory::new(db, user.id)
        .started_at(Utc::now() - Duration::hours(8))
        .ended_at(Some(Utc::now() - Duration::hours(4)))
        .build()
        .await?;
    let open = factory::shift::create_shift(db, user.id).await?;

    let repo = ShiftRepository::new(db);
    let found = repo.find_open_by_user(user.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, open.id);

    Ok(())
}

/// Tests that a user with only closed shifts has no open shift.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_all_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::shift::ShiftFactory::new(db, user.id)
        .ended_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = ShiftRepository::new(db);
    let found = repo.find_open_by_user(user.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that another user's open shift is not returned.
///
/// Expected: Ok(None) for the user without shifts
#[tokio::test]
async fn scopes_to_requested_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::shift::create_shift(db, worker.id).await?;

    let repo = ShiftRepository::new(db);
    let found = repo.find_open_by_user(other.id).await?;

    assert!(found.is_none());

    Ok(())
}

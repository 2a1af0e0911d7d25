use super::*;

/// Tests replacing a shift's interval and note.
///
/// Expected: Ok(Some(shift)) with all fields replaced
#[tokio::test]
async fn replaces_interval_and_note() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let shift = factory::shift::create_shift(db, user.id).await?;

    let started_at = Utc::now() - Duration::hours(9);
    let ended_at = Utc::now() - Duration::hours(1);

    let repo = ShiftRepository::new(db);
    let updated = repo
        .update(UpdateShiftParam {
            shift_id: shift.id,
            started_at,
            ended_at: Some(ended_at),
            note: Some("corrected".to_string()),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.started_at, started_at);
    assert_eq!(updated.ended_at, Some(ended_at));
    assert_eq!(updated.note.as_deref(), Some("corrected"));

    Ok(())
}

/// Tests deleting a shift.
///
/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let shift = factory::shift::create_shift(db, user.id).await?;

    let repo = ShiftRepository::new(db);
    assert!(repo.delete(shift.id).await?);
    assert!(repo.find_by_id(shift.id).await?.is_none());

    Ok(())
}

use super::*;

/// Tests opening a new shift.
///
/// Verifies that the repository stores the start timestamp and note and
/// leaves the shift open.
///
/// Expected: Ok with open shift created
#[tokio::test]
async fn creates_open_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let started_at = Utc::now();

    let repo = ShiftRepository::new(db);
    let shift = repo
        .create(StartShiftParam {
            user_id: user.id,
            started_at,
            note: Some("morning".to_string()),
        })
        .await?;

    assert_eq!(shift.user_id, user.id);
    assert_eq!(shift.note.as_deref(), Some("morning"));
    assert!(shift.ended_at.is_none());
    assert!(shift.is_open());

    Ok(())
}

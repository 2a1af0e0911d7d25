use super::*;

/// Tests updating a user's name and role.
///
/// Expected: Ok(Some(user)) with the new fields persisted
#[tokio::test]
async fn updates_name_and_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateUserParam {
            user_id: user.id,
            name: "Renamed".to_string(),
            role: UserRole::Processor,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.role, UserRole::Processor);
    // Email is not part of the profile update
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateUserParam {
            user_id: 999,
            name: "Ghost".to_string(),
            role: UserRole::User,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}

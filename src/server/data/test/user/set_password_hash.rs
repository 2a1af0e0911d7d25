use super::*;

/// Tests replacing a user's stored password hash.
///
/// Expected: Ok(true) with the new hash persisted
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let replaced = repo
        .set_password_hash(user.id, "new-hash".to_string())
        .await?;

    assert!(replaced);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests setting a hash for a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let replaced = repo.set_password_hash(999, "hash".to_string()).await?;

    assert!(!replaced);

    Ok(())
}

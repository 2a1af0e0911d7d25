use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository stores the account fields and assigns an id.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "processor@example.com".to_string(),
            name: "Processor".to_string(),
            role: UserRole::Processor,
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.email, "processor@example.com");
    assert_eq!(user.name, "Processor");
    assert_eq!(user.role, UserRole::Processor);

    // Verify user exists in database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());

    Ok(())
}

/// Tests that the unique email index rejects duplicates.
///
/// Expected: Err on second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParam {
        email: "dup@example.com".to_string(),
        name: "First".to_string(),
        role: UserRole::User,
        password_hash: "hash".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParam {
            email: "dup@example.com".to_string(),
            name: "Second".to_string(),
            role: UserRole::User,
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests paginating the user list.
///
/// Verifies that the repository returns the requested page and the total
/// count across all pages.
///
/// Expected: Ok with correct page contents and total
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    let (last_page, _) = repo.get_all_paginated(2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert_eq!(last_page.len(), 1);

    Ok(())
}

/// Tests that users are ordered by name within a page.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Charlie").build().await?;
    factory::user::UserFactory::new(db).name("Alice").build().await?;
    factory::user::UserFactory::new(db).name("Bob").build().await?;

    let repo = UserRepository::new(db);
    let (users, _) = repo.get_all_paginated(0, 10).await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}

use super::*;

/// Tests creating a documentation section.
///
/// Expected: Ok with slug, title, and position persisted
#[tokio::test]
async fn creates_section() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocSectionRepository::new(db);
    let section = repo
        .create(CreateDocSectionParam {
            slug: "getting-started".to_string(),
            title: "Getting Started".to_string(),
            position: 1,
        })
        .await?;

    assert_eq!(section.slug, "getting-started");
    assert_eq!(section.title, "Getting Started");
    assert_eq!(section.position, 1);
    assert!(section.pages.is_empty());

    Ok(())
}

/// Tests that the unique slug index rejects duplicates.
///
/// Expected: Err on second insert with the same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocSectionRepository::new(db);
    repo.create(CreateDocSectionParam {
        slug: "faq".to_string(),
        title: "FAQ".to_string(),
        position: 0,
    })
    .await?;

    let result = repo
        .create(CreateDocSectionParam {
            slug: "faq".to_string(),
            title: "Other FAQ".to_string(),
            position: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests creating a documentation page.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::doc_section::create_section(db).await?;

    let repo = DocPageRepository::new(db);
    let page = repo
        .create(CreateDocPageParam {
            section_id: section.id,
            slug: "installation".to_string(),
            title: "Installation".to_string(),
            content: "# Installation\n\nSteps...".to_string(),
            position: 0,
            published: false,
        })
        .await?;

    assert_eq!(page.section_id, section.id);
    assert_eq!(page.slug, "installation");
    assert!(!page.published);

    Ok(())
}

/// Tests that page slugs are unique across sections.
///
/// Expected: Err on second insert with the same slug
#[tokio::test]
async fn rejects_duplicate_slug_across_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::doc_section::create_section(db).await?;
    let second = factory::doc_section::create_section(db).await?;

    factory::doc_page::DocPageFactory::new(db, first.id)
        .slug("overview")
        .build()
        .await?;

    let repo = DocPageRepository::new(db);
    let result = repo
        .create(CreateDocPageParam {
            section_id: second.id,
            slug: "overview".to_string(),
            title: "Overview".to_string(),
            content: String::new(),
            position: 0,
            published: true,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

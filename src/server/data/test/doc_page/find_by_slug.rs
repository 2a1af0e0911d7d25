use super::*;

/// Tests looking up a page by slug.
///
/// Expected: Ok(Some(page)) regardless of published state
#[tokio::test]
async fn finds_page_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::doc_section::create_section(db).await?;
    let page = factory::doc_page::DocPageFactory::new(db, section.id)
        .slug("api-reference")
        .published(false)
        .build()
        .await?;

    let repo = DocPageRepository::new(db);
    let found = repo.find_by_slug("api-reference").await?;

    // Draft gating is a service concern, the repository returns drafts too
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, page.id);

    Ok(())
}

/// Tests looking up an unknown slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocPageRepository::new(db);
    assert!(repo.find_by_slug("missing").await?.is_none());

    Ok(())
}

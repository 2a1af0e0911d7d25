use super::*;

/// Tests listing a section's pages ordered by position.
///
/// Expected: Ok with only the section's pages in position order
#[tokio::test]
async fn lists_section_pages_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::doc_section::create_section(db).await?;
    let other_section = factory::doc_section::create_section(db).await?;

    let second = factory::doc_page::DocPageFactory::new(db, section.id)
        .position(2)
        .build()
        .await?;
    let first = factory::doc_page::DocPageFactory::new(db, section.id)
        .position(1)
        .build()
        .await?;
    factory::doc_page::create_page(db, other_section.id).await?;

    let repo = DocPageRepository::new(db);
    let pages = repo.list_by_section(section.id).await?;

    let ids: Vec<i32> = pages.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

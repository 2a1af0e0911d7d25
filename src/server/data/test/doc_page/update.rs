use super::*;

/// Tests replacing a page's fields, including moving it to another section
/// and toggling publication.
///
/// Expected: Ok(Some(page)) with all fields replaced
#[tokio::test]
async fn replaces_page_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::doc_section::create_section(db).await?;
    let target_section = factory::doc_section::create_section(db).await?;
    let page = factory::doc_page::create_page(db, section.id).await?;

    let repo = DocPageRepository::new(db);
    let updated = repo
        .update(UpdateDocPageParam {
            page_id: page.id,
            section_id: target_section.id,
            slug: "moved".to_string(),
            title: "Moved".to_string(),
            content: "Updated body".to_string(),
            position: 3,
            published: false,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.section_id, target_section.id);
    assert_eq!(updated.slug, "moved");
    assert_eq!(updated.content, "Updated body");
    assert!(!updated.published);

    Ok(())
}

/// Tests deleting a page.
///
/// Expected: Ok(true) then Ok(None) on lookup
#[tokio::test]
async fn deletes_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, page) = factory::helpers::create_page_with_section(db).await?;

    let repo = DocPageRepository::new(db);
    assert!(repo.delete(page.id).await?);
    assert!(repo.find_by_id(page.id).await?.is_none());

    Ok(())
}

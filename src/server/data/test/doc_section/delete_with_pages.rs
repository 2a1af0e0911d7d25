use super::*;

/// Tests deleting a section together with its pages.
///
/// Verifies that pages of the deleted section are removed while pages of
/// other sections stay untouched.
///
/// Expected: Ok(true) with only the section's pages removed
#[tokio::test]
async fn removes_section_and_its_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::doc_section::create_section(db).await?;
    let doomed_page = factory::doc_page::create_page(db, section.id).await?;
    let (other_section, other_page) = factory::helpers::create_page_with_section(db).await?;

    let sections = DocSectionRepository::new(db);
    let pages = DocPageRepository::new(db);

    assert!(sections.delete_with_pages(section.id).await?);

    assert!(sections.find_by_id(section.id).await?.is_none());
    assert!(pages.find_by_id(doomed_page.id).await?.is_none());
    assert!(sections.find_by_id(other_section.id).await?.is_some());
    assert!(pages.find_by_id(other_page.id).await?.is_some());

    Ok(())
}

/// Tests deleting a section that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_section() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocSectionRepository::new(db);
    assert!(!repo.delete_with_pages(999).await?);

    Ok(())
}

use super::*;

/// Tests replacing a section's slug, title, and position.
///
/// Expected: Ok(Some(section)) with the new fields
#[tokio::test]
async fn replaces_section_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::doc_section::create_section(db).await?;

    let repo = DocSectionRepository::new(db);
    let updated = repo
        .update(UpdateDocSectionParam {
            section_id: section.id,
            slug: "renamed".to_string(),
            title: "Renamed".to_string(),
            position: 7,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.slug, "renamed");
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.position, 7);

    Ok(())
}

/// Tests updating a section that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_section() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocSectionRepository::new(db);
    let updated = repo
        .update(UpdateDocSectionParam {
            section_id: 999,
            slug: "ghost".to_string(),
            title: "Ghost".to_string(),
            position: 0,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}

use super::*;

/// Tests detecting a taken slug.
///
/// Expected: Ok(true) for a used slug, Ok(false) for a free one
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::doc_section::DocSectionFactory::new(db)
        .slug("guides")
        .build()
        .await?;

    let repo = DocSectionRepository::new(db);
    assert!(repo.slug_exists("guides", None).await?);
    assert!(!repo.slug_exists("tutorials", None).await?);

    Ok(())
}

/// Tests that a section's own slug is ignored when excluded.
///
/// The exclusion covers the update path where a section keeps its current
/// slug.
///
/// Expected: Ok(false) when the only match is the excluded section
#[tokio::test]
async fn ignores_excluded_section() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let section = factory::doc_section::DocSectionFactory::new(db)
        .slug("guides")
        .build()
        .await?;

    let repo = DocSectionRepository::new(db);
    assert!(!repo.slug_exists("guides", Some(section.id)).await?);

    Ok(())
}

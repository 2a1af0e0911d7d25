use super::*;

/// Tests listing sections ordered by position.
///
/// Expected: Ok with sections in ascending position order
#[tokio::test]
async fn orders_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_docs_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let last = factory::doc_section::DocSectionFactory::new(db)
        .position(10)
        .build()
        .await?;
    let first = factory::doc_section::DocSectionFactory::new(db)
        .position(1)
        .build()
        .await?;
    let middle = factory::doc_section::DocSectionFactory::new(db)
        .position(5)
        .build()
        .await?;

    let repo = DocSectionRepository::new(db);
    let sections = repo.get_all_ordered().await?;

    let ids: Vec<i32> = sections.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, middle.id, last.id]);

    Ok(())
}

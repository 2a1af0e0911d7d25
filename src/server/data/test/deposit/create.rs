use super::*;

/// Tests recording a deposit.
///
/// Expected: Ok with the amount and processor persisted
#[tokio::test]
async fn records_deposit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tracking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let processor = factory::user::create_user(db).await?;
    let deposited_at = Utc::now();

    let repo = DepositRepository::new(db);
    let deposit = repo
        .create(CreateDepositParam {
            processor_id: processor.id,
            amount_cents: 42_500,
            deposited_at,
        })
        .await?;

    assert_eq!(deposit.processor_id, processor.id);
    assert_eq!(deposit.amount_cents, 42_500);
    assert_eq!(deposit.deposited_at, deposited_at);

    Ok(())
}

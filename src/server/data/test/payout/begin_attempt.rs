use super::*;

/// Tests that repeated attempts reuse one payout row.
///
/// After a failed attempt, a new attempt resets the row to pending, clears the
/// failure reason, and increments `attempts`.
///
/// Expected: Ok with a single row at 2 attempts
#[tokio::test]
async fn reuses_row_and_counts_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, assignment) =
        factory::helpers::create_confirmed_chef_assignment(db, 30_000).await?;
    let repo = PayoutRepository::new(db);

    let first = repo.begin_attempt(attempt_for(&assignment)).await?;
    repo.mark_failed(first.id, "card declined".to_string()).await?;

    let second = repo.begin_attempt(attempt_for(&assignment)).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.attempts, 2);
    assert_eq!(second.status, PayoutStatus::Pending);
    assert!(second.failure_reason.is_none());
    assert_eq!(entity::prelude::Payout::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests marking a payout as paid.
///
/// Expected: Ok with status paid and the transfer ID stored
#[tokio::test]
async fn mark_paid_stores_transfer_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, assignment) =
        factory::helpers::create_confirmed_chef_assignment(db, 30_000).await?;
    let repo = PayoutRepository::new(db);

    let payout = repo.begin_attempt(attempt_for(&assignment)).await?;
    let paid = repo.mark_paid(payout.id, "tr_1".to_string()).await?;

    assert_eq!(paid.status, PayoutStatus::Paid);
    assert_eq!(paid.transfer_id.as_deref(), Some("tr_1"));

    Ok(())
}

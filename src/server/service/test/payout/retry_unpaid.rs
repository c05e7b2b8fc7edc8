use super::*;

/// Tests the periodic retry of unpaid assignments.
///
/// Expected: only the confirmed assignment of the completed booking is paid; the
/// assignment of the still confirmed booking is left alone
#[tokio::test]
async fn pays_only_assignments_of_completed_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chef = factory::chef::ChefFactory::new(db)
        .payout_account("acct_chef", true)
        .build()
        .await?;
    let completed = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Completed)
        .build()
        .await?;
    let upcoming = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let due = factory::assignment::AssignmentFactory::chef(db, completed.id, chef.id)
        .status(AssignmentStatus::Confirmed)
        .build()
        .await?;
    let not_due = factory::assignment::AssignmentFactory::chef(db, upcoming.id, chef.id)
        .status(AssignmentStatus::Confirmed)
        .build()
        .await?;

    let gateway = FakePaymentGateway::new();
    let outcomes = PayoutService::new(db, &gateway, CURRENCY)
        .retry_unpaid()
        .await?;

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].assignment_id, due.id);
    assert!(matches!(outcomes[0].outcome, PayoutOutcome::Paid(_)));
    assert_eq!(
        assignment_payout_status(db, not_due.id).await?,
        AssignmentPayoutStatus::Unpaid
    );

    Ok(())
}

/// Tests that a retry pass after a failed transfer pays the assignment.
///
/// Expected: first pass fails, second pass pays, no rows left to retry afterwards
#[tokio::test]
async fn retries_failed_transfers_until_paid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chef = factory::chef::ChefFactory::new(db)
        .payout_account("acct_chef", true)
        .build()
        .await?;
    let booking = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Completed)
        .build()
        .await?;
    let assignment = factory::assignment::AssignmentFactory::chef(db, booking.id, chef.id)
        .status(AssignmentStatus::Completed)
        .build()
        .await?;

    let gateway = FakePaymentGateway::failing();
    let service = PayoutService::new(db, &gateway, CURRENCY);

    let first = service.retry_unpaid().await?;
    assert!(matches!(first[0].outcome, PayoutOutcome::Failed(_)));

    gateway.set_failing(false);
    let second = service.retry_unpaid().await?;
    assert!(matches!(second[0].outcome, PayoutOutcome::Paid(_)));

    assert!(service.retry_unpaid().await?.is_empty());
    assert_eq!(
        assignment_payout_status(db, assignment.id).await?,
        AssignmentPayoutStatus::Paid
    );

    Ok(())
}

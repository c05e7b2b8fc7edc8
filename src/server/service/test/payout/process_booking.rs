use super::*;

/// Tests processing every assignment on a cancelled booking.
///
/// Expected: one blocked outcome per assignment, each citing the cancellation
#[tokio::test]
async fn reports_outcome_per_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;
    let chef = factory::chef::ChefFactory::new(db)
        .payout_account("acct_chef", true)
        .build()
        .await?;
    let farmer = factory::farmer::FarmerFactory::new(db)
        .payout_account("acct_farmer", true)
        .build()
        .await?;
    factory::create_chef_assignment(db, booking.id, chef.id).await?;
    factory::create_farmer_assignment(db, booking.id, farmer.id).await?;

    let gateway = FakePaymentGateway::new();
    let outcomes = PayoutService::new(db, &gateway, CURRENCY)
        .process_booking(booking.id)
        .await?;

    assert_eq!(outcomes.len(), 2);
    for outcome in outcomes {
        let PayoutOutcome::Blocked(blockers) = outcome.outcome else {
            panic!("expected blocked outcome");
        };
        assert!(blockers.contains(&PayoutBlocker::BookingCancelled));
    }
    assert!(gateway.requests().is_empty());

    Ok(())
}

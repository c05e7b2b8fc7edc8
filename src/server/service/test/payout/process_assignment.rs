use super::*;

/// Tests paying a confirmed chef assignment.
///
/// Expected: Ok(Paid) with the transfer ID stored, assignment marked paid, and the
/// idempotency key derived from the assignment ID
#[tokio::test]
async fn pays_confirmed_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, assignment) =
        factory::helpers::create_confirmed_chef_assignment(db, 45_000).await?;
    let gateway = FakePaymentGateway::new();

    let result = PayoutService::new(db, &gateway, CURRENCY)
        .process_assignment(assignment.id)
        .await?;

    let PayoutOutcome::Paid(payout) = result.outcome else {
        panic!("expected paid outcome, got {:?}", result.outcome);
    };
    assert_eq!(payout.status, PayoutStatus::Paid);
    assert_eq!(payout.transfer_id.as_deref(), Some("tr_1"));
    assert_eq!(payout.destination, "acct_chef");
    assert_eq!(payout.amount_cents, 45_000);

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].idempotency_key,
        format!("payout-{}", assignment.id)
    );
    assert_eq!(
        assignment_payout_status(db, assignment.id).await?,
        AssignmentPayoutStatus::Paid
    );

    Ok(())
}

/// Tests that processing a paid assignment again sends nothing.
///
/// Expected: Ok(AlreadyPaid) on the second call and one transfer in total
#[tokio::test]
async fn is_idempotent_once_paid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, assignment) =
        factory::helpers::create_confirmed_chef_assignment(db, 45_000).await?;
    let gateway = FakePaymentGateway::new();
    let service = PayoutService::new(db, &gateway, CURRENCY);

    service.process_assignment(assignment.id).await?;
    let second = service.process_assignment(assignment.id).await?;

    assert!(matches!(second.outcome, PayoutOutcome::AlreadyPaid(_)));
    assert_eq!(gateway.requests().len(), 1);
    assert_eq!(entity::prelude::Payout::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests that blockers stop the payout without side effects.
///
/// The chef has no payout account and the assignment is only offered.
///
/// Expected: Ok(Blocked) listing both reasons, no payout row, no transfer
#[tokio::test]
async fn reports_blockers_without_side_effects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let chef = factory::create_chef(db).await?;
    let assignment = factory::create_chef_assignment(db, booking.id, chef.id).await?;
    let gateway = FakePaymentGateway::new();

    let result = PayoutService::new(db, &gateway, CURRENCY)
        .process_assignment(assignment.id)
        .await?;

    assert_eq!(
        result.outcome,
        PayoutOutcome::Blocked(vec![
            PayoutBlocker::AssignmentNotConfirmed,
            PayoutBlocker::MissingPayoutAccount,
        ])
    );
    assert!(gateway.requests().is_empty());
    assert!(entity::prelude::Payout::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that a failed transfer is recorded and can be retried.
///
/// Expected: Ok(Failed) with the reason stored, then Ok(Paid) on retry reusing the
/// same payout row with two attempts
#[tokio::test]
async fn retries_failed_payout() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, assignment) =
        factory::helpers::create_confirmed_chef_assignment(db, 45_000).await?;
    let gateway = FakePaymentGateway::failing();
    let service = PayoutService::new(db, &gateway, CURRENCY);

    let first = service.process_assignment(assignment.id).await?;
    let PayoutOutcome::Failed(failed) = first.outcome else {
        panic!("expected failed outcome, got {:?}", first.outcome);
    };
    assert!(failed
        .failure_reason
        .as_deref()
        .is_some_and(|reason| reason.contains("card declined")));
    assert_eq!(
        assignment_payout_status(db, assignment.id).await?,
        AssignmentPayoutStatus::Failed
    );

    gateway.set_failing(false);
    let second = service.process_assignment(assignment.id).await?;
    let PayoutOutcome::Paid(paid) = second.outcome else {
        panic!("expected paid outcome, got {:?}", second.outcome);
    };
    assert_eq!(paid.id, failed.id);
    assert_eq!(paid.attempts, 2);
    assert!(paid.failure_reason.is_none());

    Ok(())
}

/// Tests that paying a farmer records local spend.
///
/// Expected: one `local_spend_cents` metric for the farmer equal to the amount
#[tokio::test]
async fn records_local_spend_for_farmers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booking, farmer, assignment) =
        factory::helpers::create_confirmed_farmer_assignment(db, 12_500).await?;
    let gateway = FakePaymentGateway::new();

    PayoutService::new(db, &gateway, CURRENCY)
        .process_assignment(assignment.id)
        .await?;

    let metrics = entity::prelude::ImpactMetric::find().all(db).await?;
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].kind, ImpactKind::LocalSpendCents);
    assert_eq!(metrics[0].value, 12_500.0);
    assert_eq!(metrics[0].farmer_id, Some(farmer.id));
    assert_eq!(metrics[0].booking_id, Some(booking.id));

    Ok(())
}

/// Tests processing an unknown assignment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let gateway = FakePaymentGateway::new();
    let result = PayoutService::new(db, &gateway, CURRENCY)
        .process_assignment(404)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

/// Tests that auto-assignment picks the least busy qualified chef.
///
/// A 40-guest booking needs a certified chef. The emerging chef is skipped and the
/// certified chef with an existing active assignment loses to the idle master chef.
///
/// Expected: Ok with the offer going to the idle master chef
#[tokio::test]
async fn offers_to_top_ranked_chef() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .guest_count(40)
        .build()
        .await?;
    factory::chef::ChefFactory::new(db)
        .tier(ChefTier::Emerging)
        .build()
        .await?;
    let busy = factory::chef::ChefFactory::new(db)
        .tier(ChefTier::Certified)
        .build()
        .await?;
    let idle = factory::chef::ChefFactory::new(db)
        .tier(ChefTier::Master)
        .build()
        .await?;

    let other_booking = factory::booking::BookingFactory::new(db)
        .event_date(booking.event_date + chrono::Duration::days(3))
        .build()
        .await?;
    factory::create_chef_assignment(db, other_booking.id, busy.id).await?;

    let notifier = RecordingNotifier::new();
    let assignment = AssignmentService::new(db, &notifier)
        .auto_assign_chef(booking.id, 60_000)
        .await?;

    assert_eq!(assignment.provider_id, idle.id);
    assert_eq!(assignment.payout_amount_cents, 60_000);

    Ok(())
}

/// Tests auto-assignment with no eligible chef.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn fails_without_candidates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .guest_count(120)
        .build()
        .await?;
    factory::chef::ChefFactory::new(db)
        .tier(ChefTier::Certified)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let result = AssignmentService::new(db, &notifier)
        .auto_assign_chef(booking.id, 60_000)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that repeated auto-assignment moves on to the next chef.
///
/// The first offer raises the idle chef's workload to 1, which still ranks them
/// ahead of a chef with two assignments elsewhere. The second call must skip the
/// chef already offered this booking.
///
/// Expected: Ok with the second offer going to the busier chef
#[tokio::test]
async fn skips_chef_already_on_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .guest_count(12)
        .build()
        .await?;
    let idle = factory::chef::ChefFactory::new(db)
        .tier(ChefTier::Emerging)
        .build()
        .await?;
    let busy = factory::chef::ChefFactory::new(db)
        .tier(ChefTier::Emerging)
        .build()
        .await?;

    for days in [5, 9] {
        let other = factory::booking::BookingFactory::new(db)
            .event_date(booking.event_date + chrono::Duration::days(days))
            .build()
            .await?;
        factory::create_chef_assignment(db, other.id, busy.id).await?;
    }

    let notifier = RecordingNotifier::new();
    let service = AssignmentService::new(db, &notifier);

    let first = service.auto_assign_chef(booking.id, 30_000).await?;
    let second = service.auto_assign_chef(booking.id, 30_000).await?;

    assert_eq!(first.provider_id, idle.id);
    assert_eq!(second.provider_id, busy.id);

    Ok(())
}

/// Tests that a booking already offered to its only eligible chef cannot be
/// auto-assigned again.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn fails_when_only_candidate_is_already_on_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .guest_count(12)
        .build()
        .await?;
    factory::chef::ChefFactory::new(db)
        .tier(ChefTier::Emerging)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let service = AssignmentService::new(db, &notifier);

    service.auto_assign_chef(booking.id, 30_000).await?;
    let result = service.auto_assign_chef(booking.id, 30_000).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

use super::*;

/// Tests offering a booking to a chef.
///
/// Expected: Ok with an offered assignment and an SMS to the chef
#[tokio::test]
async fn offers_booking_and_texts_provider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let chef = factory::chef::ChefFactory::new(db)
        .phone("+18765550111")
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let assignment = AssignmentService::new(db, &notifier)
        .assign(chef_offer(booking.id, chef.id))
        .await?;

    assert_eq!(assignment.status, AssignmentStatus::Offered);
    assert_eq!(assignment.provider_id, chef.id);
    assert_eq!(notifier.sms_to("+18765550111").len(), 1);

    Ok(())
}

/// Tests that a provider cannot hold two active assignments on one booking.
///
/// Expected: Err(AppError::Conflict) on the second offer
#[tokio::test]
async fn rejects_duplicate_active_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let chef = factory::create_chef(db).await?;

    let notifier = RecordingNotifier::new();
    let service = AssignmentService::new(db, &notifier);

    service.assign(chef_offer(booking.id, chef.id)).await?;
    let result = service.assign(chef_offer(booking.id, chef.id)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that closed bookings and inactive providers are refused.
///
/// Expected: Err(AppError::Conflict) for both
#[tokio::test]
async fn rejects_closed_booking_and_inactive_provider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cancelled = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;
    let open = factory::create_booking(db).await?;
    let chef = factory::create_chef(db).await?;
    let retired = factory::chef::ChefFactory::new(db).active(false).build().await?;

    let notifier = RecordingNotifier::new();
    let service = AssignmentService::new(db, &notifier);

    let result = service.assign(chef_offer(cancelled.id, chef.id)).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let result = service.assign(chef_offer(open.id, retired.id)).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests offering to a provider that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_provider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;

    let notifier = RecordingNotifier::new();
    let result = AssignmentService::new(db, &notifier)
        .assign(chef_offer(booking.id, 9_999))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

/// Tests that completing a booking records meals served once.
///
/// Expected: one `meals_served` metric equal to the guest count
#[tokio::test]
async fn records_meals_served_on_completion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .guest_count(48)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, None);

    let completed = service
        .update_status(booking.id, BookingStatus::Completed)
        .await?;
    assert_eq!(completed.status, BookingStatus::Completed);

    let metrics = entity::prelude::ImpactMetric::find().all(db).await?;
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].kind, ImpactKind::MealsServed);
    assert_eq!(metrics[0].value, 48.0);
    assert_eq!(metrics[0].booking_id, Some(booking.id));

    Ok(())
}

/// Tests that backwards transitions are refused.
///
/// Expected: Err(AppError::Conflict) and the booking unchanged
#[tokio::test]
async fn rejects_invalid_transition() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Completed)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let result = BookingService::new(db, &notifier, None)
        .update_status(booking.id, BookingStatus::Pending)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Completed);

    Ok(())
}

/// Tests updating an unknown booking.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let result = BookingService::new(db, &notifier, None)
        .update_status(404, BookingStatus::Confirmed)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

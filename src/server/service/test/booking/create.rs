use super::*;

/// Tests creating a booking with requested ingredients.
///
/// The client gets an SMS confirmation and the admin an email.
///
/// Expected: Ok with a pending booking and both notifications sent
#[tokio::test]
async fn creates_pending_booking_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ingredient = factory::create_ingredient(db).await?;

    let notifier = RecordingNotifier::new();
    let booking = BookingService::new(db, &notifier, Some(ADMIN_EMAIL))
        .create(params(vec![(ingredient.id, 3.5)]))
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(notifier.sms_to("+18765550123").len(), 1);
    assert_eq!(notifier.emails_to(ADMIN_EMAIL).len(), 1);

    Ok(())
}

/// Tests that failing notifications do not fail the booking.
///
/// Expected: Ok with the booking stored
#[tokio::test]
async fn survives_notification_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::failing();
    let booking = BookingService::new(db, &notifier, Some(ADMIN_EMAIL))
        .create(params(Vec::new()))
        .await?;

    let stored = entity::prelude::Booking::find_by_id(booking.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that unknown ingredient IDs are rejected.
///
/// Expected: Err(AppError::ValidationErr) and no booking stored
#[tokio::test]
async fn rejects_unknown_ingredient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let result = BookingService::new(db, &notifier, None)
        .create(params(vec![(9_999, 1.0)]))
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));
    assert!(entity::prelude::Booking::find().all(db).await?.is_empty());
    assert!(notifier.sent().is_empty());

    Ok(())
}

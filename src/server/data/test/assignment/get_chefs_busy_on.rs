use super::*;

/// Tests detection of chefs already booked on the same event date.
///
/// A chef with an active assignment on another booking that day is busy; the
/// booking being matched and declined assignments are ignored.
///
/// Expected: Ok with only the chef holding the other active booking
#[tokio::test]
async fn finds_chefs_on_other_bookings_that_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = (Utc::now() + Duration::days(20)).date_naive();
    let target = factory::booking::BookingFactory::new(db)
        .event_date(date)
        .build()
        .await?;
    let other = factory::booking::BookingFactory::new(db)
        .event_date(date)
        .build()
        .await?;

    let busy = factory::create_chef(db).await?;
    let declined = factory::create_chef(db).await?;
    let on_target = factory::create_chef(db).await?;

    factory::assignment::AssignmentFactory::chef(db, other.id, busy.id)
        .status(AssignmentStatus::Accepted)
        .build()
        .await?;
    factory::assignment::AssignmentFactory::chef(db, other.id, declined.id)
        .status(AssignmentStatus::Declined)
        .build()
        .await?;
    factory::assignment::AssignmentFactory::chef(db, target.id, on_target.id)
        .build()
        .await?;

    let result = AssignmentRepository::new(db)
        .get_chefs_busy_on(date, target.id)
        .await?;

    assert_eq!(result.len(), 1);
    assert!(result.contains(&busy.id));

    Ok(())
}

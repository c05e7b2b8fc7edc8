use super::*;

/// Tests that bookings are listed with the latest event first.
///
/// Expected: Ok with bookings sorted by event date descending
#[tokio::test]
async fn orders_by_event_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let soon = factory::booking::BookingFactory::new(db)
        .event_date(today + Duration::days(3))
        .build()
        .await?;
    let later = factory::booking::BookingFactory::new(db)
        .event_date(today + Duration::days(90))
        .build()
        .await?;

    let (bookings, total) = BookingRepository::new(db).get_paginated(None, 0, 10).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![later.id, soon.id]);

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Ok with only cancelled bookings
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_booking(db).await?;
    let cancelled = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let (bookings, total) = BookingRepository::new(db)
        .get_paginated(Some(BookingStatus::Cancelled), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(bookings[0].id, cancelled.id);

    Ok(())
}

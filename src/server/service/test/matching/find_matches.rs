use super::*;

/// Tests farmer ranking against a booking's requested ingredients.
///
/// The farmer offering both ingredients ranks first. Of the two offering one, the
/// regenerative farmer ranks ahead. Unavailable supply and inactive farmers are left
/// out.
///
/// Expected: Ok with farmers ordered by coverage, then regenerative
#[tokio::test]
async fn ranks_farmers_by_coverage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let yam = factory::ingredient::create_named_ingredient(db, "Yellow yam").await?;
    let callaloo = factory::ingredient::create_named_ingredient(db, "Callaloo").await?;

    let booking = factory::create_booking(db).await?;
    factory::booking::create_booking_ingredient(db, booking.id, yam.id).await?;
    factory::booking::create_booking_ingredient(db, booking.id, callaloo.id).await?;

    let conventional = factory::farmer::FarmerFactory::new(db)
        .regenerative(false)
        .build()
        .await?;
    let regenerative = factory::farmer::FarmerFactory::new(db)
        .regenerative(true)
        .build()
        .await?;
    let both = factory::farmer::FarmerFactory::new(db)
        .regenerative(false)
        .build()
        .await?;
    let sold_out = factory::create_farmer(db).await?;
    let inactive = factory::farmer::FarmerFactory::new(db).active(false).build().await?;

    factory::farmer::create_farmer_ingredient(db, conventional.id, yam.id, true).await?;
    factory::farmer::create_farmer_ingredient(db, regenerative.id, callaloo.id, true).await?;
    factory::farmer::create_farmer_ingredient(db, both.id, yam.id, true).await?;
    factory::farmer::create_farmer_ingredient(db, both.id, callaloo.id, true).await?;
    factory::farmer::create_farmer_ingredient(db, sold_out.id, yam.id, false).await?;
    factory::farmer::create_farmer_ingredient(db, inactive.id, yam.id, true).await?;

    let matches = MatchingService::new(db).find_matches(booking.id).await?;

    let ranked: Vec<(i32, u64)> = matches
        .farmers
        .iter()
        .map(|c| (c.farmer.id, c.coverage))
        .collect();
    assert_eq!(
        ranked,
        vec![(both.id, 2), (regenerative.id, 1), (conventional.id, 1)]
    );

    Ok(())
}

/// Tests that a chef already booked on the event date is excluded.
///
/// Expected: Ok with only the free chef listed
#[tokio::test]
async fn excludes_chefs_busy_on_event_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let same_day = factory::booking::BookingFactory::new(db)
        .event_date(booking.event_date)
        .build()
        .await?;

    let busy = factory::create_chef(db).await?;
    let free = factory::create_chef(db).await?;
    factory::create_chef_assignment(db, same_day.id, busy.id).await?;

    let matches = MatchingService::new(db).find_matches(booking.id).await?;

    let chef_ids: Vec<i32> = matches.chefs.iter().map(|c| c.chef.id).collect();
    assert_eq!(chef_ids, vec![free.id]);
    assert!(matches.farmers.is_empty());

    Ok(())
}

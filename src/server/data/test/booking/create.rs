use super::*;

/// Tests creating a booking together with its requested ingredients.
///
/// Expected: Ok with a pending booking and both ingredients stored
#[tokio::test]
async fn stores_requested_ingredients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let callaloo = factory::ingredient::create_named_ingredient(db, "Callaloo").await?;
    let ackee = factory::ingredient::create_named_ingredient(db, "Ackee").await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            client_name: "Marcia".to_string(),
            client_email: "marcia@example.com".to_string(),
            client_phone: None,
            event_date: (Utc::now() + Duration::days(14)).date_naive(),
            event_type: "Wedding".to_string(),
            location: "Port Antonio".to_string(),
            guest_count: 40,
            budget_cents: Some(500_000),
            dietary_notes: None,
            ingredients: vec![(callaloo.id, 3.0), (ackee.id, 5.5)],
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);

    let ingredients = repo.get_ingredients(booking.id).await?;
    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Ackee", "Callaloo"]);
    assert_eq!(ingredients[0].quantity, 5.5);

    let mut ids = repo.get_requested_ingredient_ids(booking.id).await?;
    ids.sort();
    let mut expected = vec![callaloo.id, ackee.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

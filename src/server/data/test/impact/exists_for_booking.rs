use super::*;

/// Tests detection of a metric already recorded for a booking.
///
/// Expected: Ok(true) for the recorded kind, Ok(false) for another kind
#[tokio::test]
async fn matches_booking_and_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let repo = ImpactRepository::new(db);

    assert!(!repo.exists_for_booking(booking.id, ImpactKind::MealsServed).await?);

    repo.create(CreateImpactMetricParams {
        booking_id: Some(booking.id),
        ..metric(ImpactKind::MealsServed, 12.0)
    })
    .await?;

    assert!(repo.exists_for_booking(booking.id, ImpactKind::MealsServed).await?);
    assert!(!repo.exists_for_booking(booking.id, ImpactKind::ProduceKg).await?);

    Ok(())
}

use super::*;

/// Tests that only farmer-attributed metrics are returned with the farmer's name.
///
/// Expected: Ok with one row for the farmer
#[tokio::test]
async fn returns_farmer_attributed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let farmer = factory::farmer::FarmerFactory::new(db)
        .name("Blue Hills Farm")
        .build()
        .await?;
    let repo = ImpactRepository::new(db);

    repo.create(CreateImpactMetricParams {
        farmer_id: Some(farmer.id),
        ..metric(ImpactKind::ProduceKg, 40.0)
    })
    .await?;
    repo.create(metric(ImpactKind::MealsServed, 80.0)).await?;

    let rows = repo.get_farmer_values().await?;

    assert_eq!(
        rows,
        vec![(
            farmer.id,
            "Blue Hills Farm".to_string(),
            ImpactKind::ProduceKg,
            40.0
        )]
    );
    assert_eq!(repo.get_all_values().await?.len(), 2);

    Ok(())
}

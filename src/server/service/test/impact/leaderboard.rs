use super::*;

/// Tests ranking farmers by score and truncating to the limit.
///
/// Expected: Ok with the highest scoring farmer first and only `limit` entries
#[tokio::test]
async fn ranks_highest_score_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let small = factory::create_farmer(db).await?;
    let large = factory::create_farmer(db).await?;
    let middle = factory::create_farmer(db).await?;
    let service = ImpactService::new(db);

    service
        .record(metric(ImpactKind::ProduceKg, 1.0, Some(small.id)))
        .await?;
    service
        .record(metric(ImpactKind::RegenerativeAcres, 5.0, Some(large.id)))
        .await?;
    service
        .record(metric(ImpactKind::LocalSpendCents, 2_000.0, Some(middle.id)))
        .await?;
    service
        .record(metric(ImpactKind::ProduceKg, 3.0, Some(middle.id)))
        .await?;

    let leaderboard = service.leaderboard(2).await?;

    let ranked: Vec<(i32, f64)> = leaderboard
        .iter()
        .map(|entry| (entry.farmer_id, entry.score()))
        .collect();
    assert_eq!(ranked, vec![(large.id, 50.0), (middle.id, 16.0)]);

    Ok(())
}

use super::*;

/// Tests the weighted community score.
///
/// 100 meals (100) + $200 local spend (100) + 10 kg produce (20) + 2 acres (20) +
/// 2 farmers supported (50) = 290.
///
/// Expected: Ok with totals per kind, 2 farmers supported, score 290.0
#[tokio::test]
async fn weights_totals_and_farmers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_farmer(db).await?;
    let second = factory::create_farmer(db).await?;
    let service = ImpactService::new(db);

    service.record(metric(ImpactKind::MealsServed, 100.0, None)).await?;
    service
        .record(metric(ImpactKind::LocalSpendCents, 20_000.0, Some(first.id)))
        .await?;
    service
        .record(metric(ImpactKind::ProduceKg, 10.0, Some(second.id)))
        .await?;
    service
        .record(metric(ImpactKind::RegenerativeAcres, 2.0, Some(first.id)))
        .await?;

    let summary = service.summary().await?;

    assert_eq!(summary.totals.meals_served, 100.0);
    assert_eq!(summary.totals.local_spend_cents, 20_000.0);
    assert_eq!(summary.farmers_supported, 2);
    assert_eq!(summary.score(), 290.0);

    Ok(())
}

/// Tests the summary with no metrics.
///
/// Expected: Ok with a zero score
#[tokio::test]
async fn empty_summary_scores_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let summary = ImpactService::new(db).summary().await?;

    assert_eq!(summary.farmers_supported, 0);
    assert_eq!(summary.score(), 0.0);

    Ok(())
}

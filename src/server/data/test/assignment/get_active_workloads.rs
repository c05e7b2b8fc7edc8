use super::*;

/// Tests that only offered, accepted, and confirmed assignments count as workload.
///
/// Expected: Ok with a count of 2 for the chef
#[tokio::test]
async fn counts_only_active_statuses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chef = factory::create_chef(db).await?;
    for status in [
        AssignmentStatus::Offered,
        AssignmentStatus::Confirmed,
        AssignmentStatus::Declined,
        AssignmentStatus::Completed,
    ] {
        let booking = factory::create_booking(db).await?;
        factory::assignment::AssignmentFactory::chef(db, booking.id, chef.id)
            .status(status)
            .build()
            .await?;
    }

    let workloads = AssignmentRepository::new(db)
        .get_active_workloads(ProviderKind::Chef)
        .await?;

    assert_eq!(workloads.get(&chef.id), Some(&2));

    Ok(())
}

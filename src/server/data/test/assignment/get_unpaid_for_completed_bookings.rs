use super::*;

/// Tests selection of assignments eligible for the payout retry job.
///
/// Expected: Ok with only the unpaid confirmed assignment of the completed booking
#[tokio::test]
async fn selects_unpaid_assignments_of_completed_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let completed = factory::booking::BookingFactory::new(db)
        .status(BookingStatus::Completed)
        .build()
        .await?;
    let pending = factory::create_booking(db).await?;
    let chef = factory::create_chef(db).await?;
    let farmer = factory::create_farmer(db).await?;

    let due = factory::assignment::AssignmentFactory::chef(db, completed.id, chef.id)
        .status(AssignmentStatus::Confirmed)
        .build()
        .await?;
    factory::assignment::AssignmentFactory::farmer(db, completed.id, farmer.id)
        .status(AssignmentStatus::Completed)
        .payout_status(AssignmentPayoutStatus::Paid)
        .build()
        .await?;
    factory::assignment::AssignmentFactory::chef(db, pending.id, chef.id)
        .status(AssignmentStatus::Confirmed)
        .build()
        .await?;

    let result = AssignmentRepository::new(db)
        .get_unpaid_for_completed_bookings()
        .await?;

    let ids: Vec<i32> = result.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![due.id]);

    Ok(())
}

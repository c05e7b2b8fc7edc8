use super::*;

/// Tests that a farmer assignment stores the provider in `farmer_id`.
///
/// Expected: Ok with an offered, unpaid assignment resolving to the farmer
#[tokio::test]
async fn creates_offered_farmer_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let farmer = factory::create_farmer(db).await?;

    let repo = AssignmentRepository::new(db);
    let assignment = repo
        .create(CreateAssignmentParams {
            booking_id: booking.id,
            provider: ProviderRef {
                kind: ProviderKind::Farmer,
                id: farmer.id,
            },
            payout_amount_cents: 12_500,
            notes: Some("Greens for 40".to_string()),
        })
        .await?;

    assert_eq!(assignment.kind, ProviderKind::Farmer);
    assert_eq!(assignment.provider_id, farmer.id);
    assert_eq!(assignment.status, AssignmentStatus::Offered);
    assert_eq!(assignment.payout_status, AssignmentPayoutStatus::Unpaid);

    let provider = ProviderRef {
        kind: ProviderKind::Farmer,
        id: farmer.id,
    };
    assert!(repo.has_active_for(booking.id, provider).await?);
    assert_eq!(repo.get_by_provider(provider).await?.len(), 1);

    Ok(())
}

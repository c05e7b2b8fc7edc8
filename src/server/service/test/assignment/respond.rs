use super::*;

/// Tests a chef accepting their own offer.
///
/// Expected: Ok with status accepted and responded_at set
#[tokio::test]
async fn accepts_own_offer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let chef = factory::create_chef(db).await?;
    let offer = factory::create_chef_assignment(db, booking.id, chef.id).await?;

    let notifier = RecordingNotifier::new();
    let assignment = AssignmentService::new(db, &notifier)
        .respond(
            ProviderRef {
                kind: ProviderKind::Chef,
                id: chef.id,
            },
            offer.id,
            true,
        )
        .await?;

    assert_eq!(assignment.status, AssignmentStatus::Accepted);
    assert!(assignment.responded_at.is_some());

    Ok(())
}

/// Tests responding to another provider's assignment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_other_providers_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let owner = factory::create_chef(db).await?;
    let other = factory::create_chef(db).await?;
    let offer = factory::create_chef_assignment(db, booking.id, owner.id).await?;

    let notifier = RecordingNotifier::new();
    let result = AssignmentService::new(db, &notifier)
        .respond(
            ProviderRef {
                kind: ProviderKind::Chef,
                id: other.id,
            },
            offer.id,
            false,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests responding to an assignment that is no longer offered.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_answered_offer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;
    let chef = factory::create_chef(db).await?;
    let offer = factory::assignment::AssignmentFactory::chef(db, booking.id, chef.id)
        .status(AssignmentStatus::Declined)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let result = AssignmentService::new(db, &notifier)
        .respond(
            ProviderRef {
                kind: ProviderKind::Chef,
                id: chef.id,
            },
            offer.id,
            true,
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

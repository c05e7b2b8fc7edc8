use super::*;

/// Tests accepting a farmer invite.
///
/// Creates the user with the invite's role and a linked farmer profile, and marks
/// the invite accepted.
///
/// Expected: Ok with a farmer user; the token can no longer be used
#[tokio::test]
async fn creates_user_and_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .email("new.farmer@example.com")
        .role(UserRole::Farmer)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let service = InviteService::new(db, &notifier, APP_URL);

    let user = service
        .accept(&invite.token, "Marcia Brown".to_string(), None)
        .await?;

    assert_eq!(user.email, "new.farmer@example.com");
    assert_eq!(user.role, UserRole::Farmer);

    let farmer = crate::server::data::farmer::FarmerRepository::new(db)
        .find_by_user_id(user.id)
        .await?;
    assert!(farmer.is_some());

    let again = service.get_by_token(&invite.token).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that an expired invite cannot be accepted.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_expired_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let result = InviteService::new(db, &notifier, APP_URL)
        .accept(&invite.token, "Late Comer".to_string(), None)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

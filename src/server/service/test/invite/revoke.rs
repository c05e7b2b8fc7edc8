use super::*;

/// Tests revoking a pending invite.
///
/// Expected: Ok with status Revoked, and the token no longer resolves
#[tokio::test]
async fn revokes_pending_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::create_invite(db).await?;

    let notifier = RecordingNotifier::new();
    let service = InviteService::new(db, &notifier, APP_URL);
    let revoked = service.revoke(invite.id).await?;

    assert_eq!(revoked.status, InviteStatus::Revoked);
    assert!(matches!(
        service.get_by_token(&invite.token).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests that revoking twice leaves the invite revoked.
///
/// Expected: Ok with status Revoked both times
#[tokio::test]
async fn revoking_revoked_invite_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .status(InviteStatus::Revoked)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let revoked = InviteService::new(db, &notifier, APP_URL)
        .revoke(invite.id)
        .await?;

    assert_eq!(revoked.status, InviteStatus::Revoked);
    assert_eq!(revoked.id, invite.id);

    Ok(())
}

/// Tests that an accepted invite cannot be revoked.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_accepted_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .status(InviteStatus::Accepted)
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let result = InviteService::new(db, &notifier, APP_URL)
        .revoke(invite.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests revoking an unknown invite.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let result = InviteService::new(db, &notifier, APP_URL).revoke(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

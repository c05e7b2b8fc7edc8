use super::*;

/// Tests that resending within the cooldown sends nothing.
///
/// Repeated resends of a just-sent invite are no-ops.
///
/// Expected: Ok with sent = false and send_count unchanged
#[tokio::test]
async fn skips_recently_sent_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .last_sent_at(Some(Utc::now() - Duration::seconds(5)))
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let service = InviteService::new(db, &notifier, APP_URL);

    for _ in 0..3 {
        let result = service.resend(invite.id).await?;
        assert!(!result.sent);
        assert_eq!(result.invite.send_count, invite.send_count);
    }
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests resending a live invite after the cooldown.
///
/// Expected: Ok with the same token, sent = true, and send_count incremented
#[tokio::test]
async fn resends_same_token_after_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db).build().await?;

    let notifier = RecordingNotifier::new();
    let result = InviteService::new(db, &notifier, APP_URL)
        .resend(invite.id)
        .await?;

    assert!(result.sent);
    assert_eq!(result.invite.token, invite.token);
    assert_eq!(result.invite.send_count, invite.send_count + 1);
    assert_eq!(notifier.emails_to(&invite.email).len(), 1);

    Ok(())
}

/// Tests that an expired invite gets a new token and expiry when resent.
///
/// Expected: Ok with a rotated token and an expiry in the future
#[tokio::test]
async fn rotates_token_of_expired_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .expires_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let result = InviteService::new(db, &notifier, APP_URL)
        .resend(invite.id)
        .await?;

    assert!(result.sent);
    assert_ne!(result.invite.token, invite.token);
    assert!(result.invite.expires_at > Utc::now() + Duration::days(6));

    Ok(())
}

/// Tests that accepted and revoked invites cannot be resent.
///
/// Expected: Err(AppError::Conflict) for both
#[tokio::test]
async fn rejects_closed_invites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = InviteService::new(db, &notifier, APP_URL);

    for status in [InviteStatus::Accepted, InviteStatus::Revoked] {
        let invite = factory::invite::InviteFactory::new(db)
            .status(status)
            .build()
            .await?;

        let result = service.resend(invite.id).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    Ok(())
}

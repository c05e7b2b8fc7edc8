use super::*;

/// Tests that a new invite is stored and its link sent by email and SMS.
///
/// Expected: Ok with created and sent set, one email and one SMS carrying the link
#[tokio::test]
async fn creates_and_delivers_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let result = InviteService::new(db, &notifier, APP_URL)
        .create(params("farmer@example.com", UserRole::Farmer))
        .await?;

    assert!(result.created);
    assert!(result.sent);
    assert_eq!(result.invite.send_count, 1);
    assert_eq!(result.invite.token.len(), 32);
    assert_eq!(notifier.emails_to("farmer@example.com").len(), 1);
    assert_eq!(notifier.sms_to("+18765550100").len(), 1);

    let link = format!("{}/invite/{}", APP_URL, result.invite.token);
    assert!(notifier
        .sent()
        .iter()
        .all(|message| format!("{:?}", message).contains(&link)));

    Ok(())
}

/// Tests that inviting the same email and role twice returns the live invite.
///
/// Expected: Ok with created = false, same invite, no second message
#[tokio::test]
async fn returns_existing_live_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = InviteService::new(db, &notifier, APP_URL);

    let first = service
        .create(params("chef@example.com", UserRole::Chef))
        .await?;
    let second = service
        .create(params("chef@example.com", UserRole::Chef))
        .await?;

    assert!(!second.created);
    assert!(!second.sent);
    assert_eq!(second.invite.id, first.invite.id);
    assert_eq!(notifier.emails_to("chef@example.com").len(), 1);

    Ok(())
}

/// Tests that an existing account cannot be invited.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let notifier = RecordingNotifier::new();
    let result = InviteService::new(db, &notifier, APP_URL)
        .create(params("taken@example.com", UserRole::Partner))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(notifier.sent().is_empty());

    Ok(())
}

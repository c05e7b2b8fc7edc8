use super::*;

/// Tests the full login round trip.
///
/// Requests a code, reads it from the sent email, and verifies it. The code is
/// consumed, so verifying again fails.
///
/// Expected: Ok with the user, then InvalidLoginCode on reuse
#[tokio::test]
async fn accepts_emailed_code_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("grower@example.com")
        .build()
        .await?;
    let notifier = RecordingNotifier::new();
    let service = AuthService::new(db, &notifier);

    service.request_login("  Grower@Example.com ").await?;
    let code = sent_code(&notifier, "grower@example.com");

    let signed_in = service.verify_login("grower@example.com", &code).await?;
    assert_eq!(signed_in.id, user.id);

    let reused = service.verify_login("grower@example.com", &code).await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidLoginCode))
    ));

    Ok(())
}

/// Tests that unknown emails are ignored without error.
///
/// Expected: Ok and no email sent
#[tokio::test]
async fn ignores_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    AuthService::new(db, &notifier)
        .request_login("nobody@example.com")
        .await?;

    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests that a code dies after five wrong guesses.
///
/// Expected: the correct code is rejected after the attempt limit
#[tokio::test]
async fn locks_code_after_max_attempts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("chef@example.com")
        .build()
        .await?;
    let notifier = RecordingNotifier::new();
    let service = AuthService::new(db, &notifier);

    service.request_login("chef@example.com").await?;
    let code = sent_code(&notifier, "chef@example.com");
    let wrong = if code == "000000" { "111111" } else { "000000" };

    for _ in 0..5 {
        let result = service.verify_login("chef@example.com", wrong).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidLoginCode))
        ));
    }

    let result = service.verify_login("chef@example.com", &code).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidLoginCode))
    ));

    Ok(())
}

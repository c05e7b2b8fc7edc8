use super::*;

/// Tests submitting an inquiry with an admin address configured.
///
/// Expected: Ok with status New, and one email to the admin naming the organization
#[tokio::test]
async fn stores_inquiry_and_emails_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let inquiry = PartnerService::new(db, &notifier, Some(ADMIN_EMAIL))
        .submit(params("Blue Mountain Growers"))
        .await?;

    assert_eq!(inquiry.status, InquiryStatus::New);
    assert_eq!(inquiry.partner_type, PartnerType::Cooperative);

    let emails = notifier.emails_to(ADMIN_EMAIL);
    assert_eq!(emails.len(), 1);
    assert!(matches!(
        &emails[0],
        SentMessage::Email { body, .. } if body.contains("Blue Mountain Growers")
    ));

    Ok(())
}

/// Tests submitting without an admin address.
///
/// Expected: Ok with the inquiry stored and nothing sent
#[tokio::test]
async fn skips_email_without_admin_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = PartnerService::new(db, &notifier, None);
    service.submit(params("Ocho Rios Bistro")).await?;

    let page = service.list(None, 0, 10).await?;
    assert_eq!(page.total, 1);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests that a failing notifier does not fail the submission.
///
/// Expected: Ok with the inquiry stored
#[tokio::test]
async fn stores_inquiry_when_email_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::failing();
    let inquiry = PartnerService::new(db, &notifier, Some(ADMIN_EMAIL))
        .submit(params("Treasure Beach Market"))
        .await?;

    assert_eq!(inquiry.organization, "Treasure Beach Market");

    Ok(())
}

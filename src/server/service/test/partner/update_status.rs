use super::*;

/// Tests moving an inquiry along and filtering by the new status.
///
/// Expected: Ok with status Contacted, listed under the Contacted filter only
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let service = PartnerService::new(db, &notifier, None);
    let inquiry = service.submit(params("Blue Mountain Growers")).await?;
    service.submit(params("Ocho Rios Bistro")).await?;

    let updated = service
        .update_status(inquiry.id, InquiryStatus::Contacted)
        .await?;
    assert_eq!(updated.status, InquiryStatus::Contacted);

    let contacted = service.list(Some(InquiryStatus::Contacted), 0, 10).await?;
    assert_eq!(contacted.total, 1);
    assert_eq!(contacted.items[0].id, inquiry.id);

    Ok(())
}

/// Tests updating an unknown inquiry.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_inquiry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::new();
    let result = PartnerService::new(db, &notifier, None)
        .update_status(404, InquiryStatus::Closed)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

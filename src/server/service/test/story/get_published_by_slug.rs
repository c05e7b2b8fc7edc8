use super::*;

/// Tests that drafts are hidden from the public lookup.
///
/// Expected: Ok for the published story, Err(AppError::NotFound) for the draft
#[tokio::test]
async fn hides_drafts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let published = factory::create_story(db, true).await?;
    let draft = factory::create_story(db, false).await?;
    let service = StoryService::new(db);

    let found = service.get_published_by_slug(&published.slug).await?;
    assert_eq!(found.id, published.id);

    let result = service.get_published_by_slug(&draft.slug).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

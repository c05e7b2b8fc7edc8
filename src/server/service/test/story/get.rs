use super::*;

/// Tests that the admin lookup returns drafts as well as published stories.
///
/// Expected: Ok for both, Err(AppError::NotFound) for an unknown id
#[tokio::test]
async fn finds_drafts_and_published() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let published = factory::create_story(db, true).await?;
    let draft = factory::create_story(db, false).await?;
    let service = StoryService::new(db);

    assert_eq!(service.get(published.id).await?.id, published.id);

    let found = service.get(draft.id).await?;
    assert_eq!(found.id, draft.id);
    assert!(!found.published);

    let result = service.get(draft.id + published.id + 100).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

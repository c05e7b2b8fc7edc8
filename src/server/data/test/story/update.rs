use super::*;

/// Tests that `published_at` is kept across unpublish and republish.
///
/// Expected: Ok with the original publish date after republishing
#[tokio::test]
async fn keeps_first_published_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StoryRepository::new(db);
    let story = repo
        .create(params("Harvest", false), "harvest".to_string(), None)
        .await?;
    assert!(story.published_at.is_none());

    let published = repo.update(story.id, params("Harvest", true)).await?.unwrap();
    let first_published_at = published.published_at;
    assert!(first_published_at.is_some());

    repo.update(story.id, params("Harvest", false)).await?;
    let republished = repo.update(story.id, params("Harvest", true)).await?.unwrap();

    assert_eq!(republished.published_at, first_published_at);

    Ok(())
}

/// Tests that a title change leaves the slug unchanged.
///
/// Expected: Ok with the original slug
#[tokio::test]
async fn title_change_keeps_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StoryRepository::new(db);
    let story = repo
        .create(params("Harvest", false), "harvest".to_string(), None)
        .await?;

    let updated = repo
        .update(story.id, params("Harvest Festival", false))
        .await?
        .unwrap();

    assert_eq!(updated.title, "Harvest Festival");
    assert_eq!(updated.slug, "harvest");

    Ok(())
}

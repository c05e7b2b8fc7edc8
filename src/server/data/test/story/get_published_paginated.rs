use super::*;

/// Tests that only published stories are listed, featured first.
///
/// Expected: Ok with the featured story before the plain one and drafts excluded
#[tokio::test]
async fn lists_featured_first_and_skips_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_story(db, false).await?;
    let plain = factory::create_story(db, true).await?;

    let repo = StoryRepository::new(db);
    let featured = repo
        .create(
            StoryParams {
                featured: true,
                ..params("Featured", true)
            },
            "featured".to_string(),
            None,
        )
        .await?;

    let (stories, total) = repo.get_published_paginated(0, 10).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = stories.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![featured.id, plain.id]);

    Ok(())
}

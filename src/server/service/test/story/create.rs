use super::*;

/// Tests that stories with the same title get suffixed slugs.
///
/// Expected: `harvest-table`, `harvest-table-2`, `harvest-table-3`
#[tokio::test]
async fn suffixes_colliding_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StoryService::new(db);

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let story = service.create(params("Harvest Table!", false), None).await?;
        slugs.push(story.slug);
    }

    assert_eq!(slugs, vec!["harvest-table", "harvest-table-2", "harvest-table-3"]);

    Ok(())
}

/// Tests that renaming a story keeps its slug.
///
/// Expected: Ok with the new title and the original slug
#[tokio::test]
async fn keeps_slug_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StoryService::new(db);
    let story = service.create(params("Blue Mountain Coffee", true), None).await?;

    let updated = service
        .update(story.id, params("Blue Mountain Coffee Farmers", true))
        .await?;

    assert_eq!(updated.title, "Blue Mountain Coffee Farmers");
    assert_eq!(updated.slug, "blue-mountain-coffee");
    assert_eq!(updated.published_at, story.published_at);

    Ok(())
}

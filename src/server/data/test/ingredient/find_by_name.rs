use super::*;

/// Tests that name lookup ignores case and surrounding whitespace.
///
/// Expected: Ok(Some(ingredient))
#[tokio::test]
async fn matches_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scotch = factory::ingredient::create_named_ingredient(db, "Scotch Bonnet").await?;

    let found = IngredientRepository::new(db)
        .find_by_name("  scotch BONNET ")
        .await?;

    assert_eq!(found.map(|i| i.id), Some(scotch.id));

    Ok(())
}

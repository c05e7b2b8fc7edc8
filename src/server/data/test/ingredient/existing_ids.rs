use super::*;

/// Tests that only IDs present in the catalog are returned.
///
/// Expected: Ok with the known ID only
#[tokio::test]
async fn filters_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ingredient = factory::create_ingredient(db).await?;

    let existing = IngredientRepository::new(db)
        .existing_ids(&[ingredient.id, ingredient.id + 100])
        .await?;

    assert_eq!(existing.len(), 1);
    assert!(existing.contains(&ingredient.id));

    Ok(())
}

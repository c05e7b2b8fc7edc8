use super::*;

/// Tests adding a new ingredient.
///
/// Expected: Ok with the ingredient listed in the catalog
#[tokio::test]
async fn creates_ingredient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = IngredientService::new(db);
    let ingredient = service.create(params("Scotch Bonnet")).await?;

    assert_eq!(ingredient.name, "Scotch Bonnet");
    assert!(ingredient.seasonal);
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

/// Tests that a name differing only in case is a duplicate.
///
/// Expected: Err(AppError::Conflict) and no second row
#[tokio::test]
async fn rejects_duplicate_name_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ingredient::create_named_ingredient(db, "Callaloo").await?;

    let service = IngredientService::new(db);
    let result = service.create(params("CALLALOO")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

use super::*;

/// Tests that renaming onto another ingredient's name is a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_rename_onto_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ingredient::create_named_ingredient(db, "Ackee").await?;
    let yam = factory::ingredient::create_named_ingredient(db, "Yellow Yam").await?;

    let result = IngredientService::new(db)
        .update(yam.id, params("ackee"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that an ingredient can keep its own name with different casing.
///
/// Expected: Ok with the new casing stored
#[tokio::test]
async fn allows_recasing_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let yam = factory::ingredient::create_named_ingredient(db, "yellow yam").await?;

    let updated = IngredientService::new(db)
        .update(yam.id, params("Yellow Yam"))
        .await?;

    assert_eq!(updated.id, yam.id);
    assert_eq!(updated.name, "Yellow Yam");

    Ok(())
}

/// Tests updating an unknown ingredient.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_ingredient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = IngredientService::new(db)
        .update(77, params("Breadfruit"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

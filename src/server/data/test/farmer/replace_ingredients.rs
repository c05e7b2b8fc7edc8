use super::*;

/// Tests that the supply list is replaced rather than merged.
///
/// Expected: Ok with only the newly provided items listed
#[tokio::test]
async fn replaces_previous_supply_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let farmer = factory::create_farmer(db).await?;
    let kale = factory::ingredient::create_named_ingredient(db, "Kale").await?;
    let yam = factory::ingredient::create_named_ingredient(db, "Yam").await?;
    factory::farmer::create_farmer_ingredient(db, farmer.id, kale.id, true).await?;

    let repo = FarmerRepository::new(db);
    repo.replace_ingredients(
        farmer.id,
        vec![SupplyItemParams {
            ingredient_id: yam.id,
            price_cents: 420,
            available: false,
        }],
    )
    .await?;

    let items = repo.get_ingredients(farmer.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].ingredient_name, "Yam");
    assert_eq!(items[0].price_cents, 420);
    assert!(!items[0].available);

    Ok(())
}

/// Tests that an empty list clears the supply list.
///
/// Expected: Ok with no items
#[tokio::test]
async fn empty_list_clears_supply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let farmer = factory::create_farmer(db).await?;
    let kale = factory::create_ingredient(db).await?;
    factory::farmer::create_farmer_ingredient(db, farmer.id, kale.id, true).await?;

    let repo = FarmerRepository::new(db);
    repo.replace_ingredients(farmer.id, Vec::new()).await?;

    assert!(repo.get_ingredients(farmer.id).await?.is_empty());

    Ok(())
}

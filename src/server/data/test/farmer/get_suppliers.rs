use super::*;

/// Tests that suppliers are active farmers currently offering the ingredient.
///
/// Expected: Ok with only the active farmer whose item is available
#[tokio::test]
async fn returns_active_farmers_with_available_supply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_provider_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kale = factory::create_ingredient(db).await?;
    let supplier = factory::create_farmer(db).await?;
    let sold_out = factory::create_farmer(db).await?;
    let inactive = factory::farmer::FarmerFactory::new(db)
        .active(false)
        .build()
        .await?;

    factory::farmer::create_farmer_ingredient(db, supplier.id, kale.id, true).await?;
    factory::farmer::create_farmer_ingredient(db, sold_out.id, kale.id, false).await?;
    factory::farmer::create_farmer_ingredient(db, inactive.id, kale.id, true).await?;

    let suppliers = FarmerRepository::new(db).get_suppliers(kale.id).await?;

    let ids: Vec<i32> = suppliers.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![supplier.id]);

    Ok(())
}

use super::*;

/// Tests admin detection with only non-admin users.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .role(UserRole::Chef)
        .build()
        .await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(!result);

    Ok(())
}

/// Tests admin detection once an admin exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let result = UserRepository::new(db).admin_exists().await?;

    assert!(result);

    Ok(())
}

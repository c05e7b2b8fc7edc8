use super::*;

/// Tests email lookup ignores the case of the query.
///
/// Stored emails are lowercase; a mixed-case lookup must still find the user.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_user_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("grower@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .find_by_email("Grower@Example.COM")
        .await?;

    assert_eq!(result.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests lookup of an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(result.is_none());

    Ok(())
}

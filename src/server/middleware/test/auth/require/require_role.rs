use super::*;

/// Tests that any one of several listed roles is enough.
///
/// Expected: Ok(User) for a farmer on a chef-or-farmer endpoint
#[tokio::test]
async fn grants_access_when_any_role_matches() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Farmer)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::Chef, Permission::Farmer])
        .await?;

    assert_eq!(returned.role, UserRole::Farmer);

    Ok(())
}

/// Tests that admins pass provider checks too.
///
/// Expected: Ok(User) for an admin on a chef-only endpoint
#[tokio::test]
async fn admin_passes_every_role_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Chef])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a partner is kept out of provider endpoints.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unlisted_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Partner)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Chef, Permission::Farmer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

use super::*;

/// Tests that issuing a new code invalidates the previous one.
///
/// Expected: Ok with only the newest code returned by `find_active`
#[tokio::test]
async fn invalidates_previous_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = LoginCodeRepository::new(db);
    let expires_at = Utc::now() + Duration::minutes(10);

    let first = repo.create(user.id, "hash-one".to_string(), expires_at).await?;
    let second = repo.create(user.id, "hash-two".to_string(), expires_at).await?;

    let active = repo.find_active(user.id, Utc::now()).await?;
    assert_eq!(active.map(|c| c.id), Some(second.id));

    let first = entity::prelude::LoginCode::find_by_id(first.id)
        .one(db)
        .await?
        .unwrap();
    assert!(first.consumed_at.is_some());

    Ok(())
}

/// Tests that expired codes are not returned as active.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = LoginCodeRepository::new(db);

    repo.create(
        user.id,
        "hash".to_string(),
        Utc::now() - Duration::minutes(1),
    )
    .await?;

    assert!(repo.find_active(user.id, Utc::now()).await?.is_none());

    Ok(())
}

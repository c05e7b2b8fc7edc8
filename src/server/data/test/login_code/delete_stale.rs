use super::*;

/// Tests that only consumed or expired codes older than the cutoff are deleted.
///
/// Expected: Ok(1) with the live code retained
#[tokio::test]
async fn deletes_only_dead_codes_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = LoginCodeRepository::new(db);

    repo.create(user.id, "dead".to_string(), Utc::now() - Duration::minutes(5))
        .await?;
    let live = repo
        .create(other.id, "live".to_string(), Utc::now() + Duration::minutes(10))
        .await?;

    let deleted = repo.delete_stale(Utc::now() + Duration::seconds(1)).await?;

    assert_eq!(deleted, 1);
    let remaining = entity::prelude::LoginCode::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, live.id);

    Ok(())
}

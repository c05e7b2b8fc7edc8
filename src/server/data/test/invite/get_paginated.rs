use super::*;

/// Tests the pending and expired filters.
///
/// An invite past its expiry counts as expired, not pending, even though its stored
/// status is still pending.
///
/// Expected: Ok with each invite under exactly one filter
#[tokio::test]
async fn separates_pending_from_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_invite(db).await?;
    let expired = factory::invite::InviteFactory::new(db)
        .expires_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::invite::InviteFactory::new(db)
        .status(InviteStatus::Revoked)
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let now = Utc::now();

    let (invites, total) = repo
        .get_paginated(Some(InviteFilter::Pending), now, 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(invites[0].id, pending.id);

    let (invites, total) = repo
        .get_paginated(Some(InviteFilter::Expired), now, 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(invites[0].id, expired.id);

    let (_, total) = repo.get_paginated(None, now, 0, 10).await?;
    assert_eq!(total, 3);

    Ok(())
}

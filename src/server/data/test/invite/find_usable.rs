use super::*;

/// Tests that a pending, unexpired invite for the same email and role is found.
///
/// Expected: Ok(Some(invite))
#[tokio::test]
async fn finds_pending_invite_for_email_and_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .email("chef@example.com")
        .role(UserRole::Chef)
        .build()
        .await?;

    let result = InviteRepository::new(db)
        .find_usable("chef@example.com", UserRole::Chef, Utc::now())
        .await?;

    assert_eq!(result.map(|i| i.id), Some(invite.id));

    Ok(())
}

/// Tests that expired invites and invites for another role are ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_and_other_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::invite::InviteFactory::new(db)
        .email("chef@example.com")
        .role(UserRole::Chef)
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;
    factory::invite::InviteFactory::new(db)
        .email("chef@example.com")
        .role(UserRole::Farmer)
        .build()
        .await?;

    let result = InviteRepository::new(db)
        .find_usable("chef@example.com", UserRole::Chef, Utc::now())
        .await?;

    assert!(result.is_none());

    Ok(())
}

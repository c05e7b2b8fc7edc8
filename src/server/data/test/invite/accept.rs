use super::*;

/// Tests accepting a farmer invite.
///
/// Verifies that the user, a linked farmer profile, and the accepted invite state
/// are all written.
///
/// Expected: Ok with user linked to a new farmer profile and invite accepted
#[tokio::test]
async fn creates_user_and_farmer_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db)
        .email("grower@example.com")
        .role(UserRole::Farmer)
        .build()
        .await?;

    let (user, accepted) = InviteRepository::new(db)
        .accept(
            invite.id,
            CreateUserParams {
                email: "grower@example.com".to_string(),
                name: "Ana Grower".to_string(),
                phone: None,
                role: UserRole::Farmer,
            },
        )
        .await?;

    assert_eq!(user.role, UserRole::Farmer);
    assert_eq!(accepted.status, InviteStatus::Accepted);
    assert_eq!(accepted.accepted_user_id, Some(user.id));
    assert!(accepted.accepted_at.is_some());

    let farmers = entity::prelude::Farmer::find().all(db).await?;
    assert_eq!(farmers.len(), 1);
    assert_eq!(farmers[0].user_id, Some(user.id));
    assert_eq!(farmers[0].name, "Ana Grower");

    Ok(())
}

/// Tests accepting a chef invite when an admin already created the chef profile.
///
/// Expected: Ok with the existing profile linked and no duplicate created
#[tokio::test]
async fn links_existing_chef_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chef = factory::chef::ChefFactory::new(db).build().await?;
    let invite = factory::invite::InviteFactory::new(db)
        .email(chef.email.clone())
        .role(UserRole::Chef)
        .build()
        .await?;

    let (user, _) = InviteRepository::new(db)
        .accept(
            invite.id,
            CreateUserParams {
                email: chef.email.clone(),
                name: "Chef Name".to_string(),
                phone: None,
                role: UserRole::Chef,
            },
        )
        .await?;

    let chefs = entity::prelude::Chef::find().all(db).await?;
    assert_eq!(chefs.len(), 1);
    assert_eq!(chefs[0].id, chef.id);
    assert_eq!(chefs[0].user_id, Some(user.id));

    Ok(())
}

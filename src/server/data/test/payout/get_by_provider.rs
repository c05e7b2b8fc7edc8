use super::*;

/// Tests that providers only see their own payouts.
///
/// Expected: Ok with one payout for each farmer
#[tokio::test]
async fn returns_only_the_providers_payouts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, farmer, assignment) =
        factory::helpers::create_confirmed_farmer_assignment(db, 8_000).await?;
    let (_, other_farmer, other_assignment) =
        factory::helpers::create_confirmed_farmer_assignment(db, 9_000).await?;

    let repo = PayoutRepository::new(db);
    repo.begin_attempt(attempt_for(&assignment)).await?;
    repo.begin_attempt(attempt_for(&other_assignment)).await?;

    let payouts = repo
        .get_by_provider(ProviderRef {
            kind: ProviderKind::Farmer,
            id: farmer.id,
        })
        .await?;
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].assignment_id, assignment.id);

    let payouts = repo
        .get_by_provider(ProviderRef {
            kind: ProviderKind::Farmer,
            id: other_farmer.id,
        })
        .await?;
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].amount_cents, 9_000);

    Ok(())
}

//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with their dependencies.

use entity::sea_orm_active_enums::AssignmentStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a booking and a chef with an active payout account, plus a confirmed
/// chef assignment between them.
///
/// # Arguments
/// - `db` - Database connection
/// - `payout_amount_cents` - Payout amount stored on the assignment
///
/// # Returns
/// - `Ok((booking, chef, assignment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_confirmed_chef_assignment(
    db: &DatabaseConnection,
    payout_amount_cents: i64,
) -> Result<
    (
        entity::booking::Model,
        entity::chef::Model,
        entity::assignment::Model,
    ),
    DbErr,
> {
    let booking = crate::factory::booking::create_booking(db).await?;
    let chef = crate::factory::chef::ChefFactory::new(db)
        .payout_account("acct_chef", true)
        .build()
        .await?;
    let assignment = crate::factory::assignment::AssignmentFactory::chef(db, booking.id, chef.id)
        .status(AssignmentStatus::Confirmed)
        .payout_amount_cents(payout_amount_cents)
        .build()
        .await?;

    Ok((booking, chef, assignment))
}

/// Creates a booking and a farmer with an active payout account, plus a confirmed
/// farmer assignment between them.
///
/// # Returns
/// - `Ok((booking, farmer, assignment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_confirmed_farmer_assignment(
    db: &DatabaseConnection,
    payout_amount_cents: i64,
) -> Result<
    (
        entity::booking::Model,
        entity::farmer::Model,
        entity::assignment::Model,
    ),
    DbErr,
> {
    let booking = crate::factory::booking::create_booking(db).await?;
    let farmer = crate::factory::farmer::FarmerFactory::new(db)
        .payout_account("acct_farmer", true)
        .build()
        .await?;
    let assignment =
        crate::factory::assignment::AssignmentFactory::farmer(db, booking.id, farmer.id)
            .status(AssignmentStatus::Confirmed)
            .payout_amount_cents(payout_amount_cents)
            .build()
            .await?;

    Ok((booking, farmer, assignment))
}

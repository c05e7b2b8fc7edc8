//! Assignment factory for linking bookings to chefs and farmers.

use chrono::Utc;
use entity::sea_orm_active_enums::{AssignmentPayoutStatus, AssignmentStatus, ProviderKind};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test assignments.
///
/// Use `AssignmentFactory::chef` or `AssignmentFactory::farmer` to pick the provider kind.
pub struct AssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    booking_id: i32,
    kind: ProviderKind,
    provider_id: i32,
    status: AssignmentStatus,
    payout_amount_cents: i64,
    payout_status: AssignmentPayoutStatus,
}

impl<'a> AssignmentFactory<'a> {
    /// Offered chef assignment with a payout amount of 100.00.
    pub fn chef(db: &'a DatabaseConnection, booking_id: i32, chef_id: i32) -> Self {
        Self::with_kind(db, booking_id, ProviderKind::Chef, chef_id)
    }

    /// Offered farmer assignment with a payout amount of 100.00.
    pub fn farmer(db: &'a DatabaseConnection, booking_id: i32, farmer_id: i32) -> Self {
        Self::with_kind(db, booking_id, ProviderKind::Farmer, farmer_id)
    }

    fn with_kind(
        db: &'a DatabaseConnection,
        booking_id: i32,
        kind: ProviderKind,
        provider_id: i32,
    ) -> Self {
        Self {
            db,
            booking_id,
            kind,
            provider_id,
            status: AssignmentStatus::Offered,
            payout_amount_cents: 100_00,
            payout_status: AssignmentPayoutStatus::Unpaid,
        }
    }

    pub fn status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payout_amount_cents(mut self, amount: i64) -> Self {
        self.payout_amount_cents = amount;
        self
    }

    pub fn payout_status(mut self, payout_status: AssignmentPayoutStatus) -> Self {
        self.payout_status = payout_status;
        self
    }

    /// Builds and inserts the assignment entity into the database.
    pub async fn build(self) -> Result<entity::assignment::Model, DbErr> {
        let (chef_id, farmer_id) = match self.kind {
            ProviderKind::Chef => (Some(self.provider_id), None),
            ProviderKind::Farmer => (None, Some(self.provider_id)),
        };

        entity::assignment::ActiveModel {
            id: ActiveValue::NotSet,
            booking_id: ActiveValue::Set(self.booking_id),
            kind: ActiveValue::Set(self.kind),
            chef_id: ActiveValue::Set(chef_id),
            farmer_id: ActiveValue::Set(farmer_id),
            status: ActiveValue::Set(self.status),
            payout_amount_cents: ActiveValue::Set(self.payout_amount_cents),
            payout_status: ActiveValue::Set(self.payout_status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            responded_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an offered chef assignment.
pub async fn create_chef_assignment(
    db: &DatabaseConnection,
    booking_id: i32,
    chef_id: i32,
) -> Result<entity::assignment::Model, DbErr> {
    AssignmentFactory::chef(db, booking_id, chef_id).build().await
}

/// Creates an offered farmer assignment.
pub async fn create_farmer_assignment(
    db: &DatabaseConnection,
    booking_id: i32,
    farmer_id: i32,
) -> Result<entity::assignment::Model, DbErr> {
    AssignmentFactory::farmer(db, booking_id, farmer_id)
        .build()
        .await
}

use entity::sea_orm_active_enums::{
    AssignmentPayoutStatus, AssignmentStatus, BookingStatus, ImpactKind, PayoutStatus,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::payout::{PayoutBlocker, PayoutOutcome},
    provider::test::FakePaymentGateway,
    service::payout::PayoutService,
};

mod process_assignment;
mod process_booking;
mod retry_unpaid;

const CURRENCY: &str = "usd";

async fn assignment_payout_status(
    db: &sea_orm::DatabaseConnection,
    assignment_id: i32,
) -> Result<AssignmentPayoutStatus, AppError> {
    let assignment = entity::prelude::Assignment::find_by_id(assignment_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

    Ok(assignment.payout_status)
}

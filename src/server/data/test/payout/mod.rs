use entity::sea_orm_active_enums::{PayoutStatus, ProviderKind};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::payout::PayoutRepository,
    model::{assignment::ProviderRef, payout::PayoutAttemptParams},
};

mod begin_attempt;
mod get_by_provider;

fn attempt_for(assignment: &entity::assignment::Model) -> PayoutAttemptParams {
    PayoutAttemptParams {
        assignment_id: assignment.id,
        booking_id: assignment.booking_id,
        kind: assignment.kind,
        destination: "acct_test".to_string(),
        amount_cents: assignment.payout_amount_cents,
        currency: "usd".to_string(),
    }
}

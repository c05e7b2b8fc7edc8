use entity::sea_orm_active_enums::{AssignmentStatus, BookingStatus, ChefTier, ProviderKind};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::assignment::{CreateAssignmentParams, ProviderRef},
    provider::test::RecordingNotifier,
    service::assignment::AssignmentService,
};

mod assign;
mod auto_assign_chef;
mod respond;

fn chef_offer(booking_id: i32, chef_id: i32) -> CreateAssignmentParams {
    CreateAssignmentParams {
        booking_id,
        provider: ProviderRef {
            kind: ProviderKind::Chef,
            id: chef_id,
        },
        payout_amount_cents: 45_000,
        notes: None,
    }
}

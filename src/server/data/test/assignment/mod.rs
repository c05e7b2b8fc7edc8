use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{
    AssignmentPayoutStatus, AssignmentStatus, BookingStatus, ProviderKind,
};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::assignment::AssignmentRepository,
    error::AppError,
    model::assignment::{CreateAssignmentParams, ProviderRef},
};

mod create;
mod get_active_workloads;
mod get_chefs_busy_on;
mod get_unpaid_for_completed_bookings;

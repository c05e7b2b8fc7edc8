use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{InviteStatus, UserRole};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::invite::CreateInviteParams,
    provider::test::RecordingNotifier,
    service::invite::InviteService,
};

mod accept;
mod create;
mod resend;
mod revoke;

const APP_URL: &str = "https://provisions.test";

fn params(email: &str, role: UserRole) -> CreateInviteParams {
    CreateInviteParams {
        email: email.to_string(),
        role,
        phone: Some("+18765550100".to_string()),
        invited_by: None,
    }
}

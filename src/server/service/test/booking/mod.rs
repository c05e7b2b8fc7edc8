use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{BookingStatus, ImpactKind};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::booking::CreateBookingParams,
    provider::test::RecordingNotifier,
    service::booking::BookingService,
};

mod create;
mod update_status;

const ADMIN_EMAIL: &str = "admin@bornfidis.test";

fn params(ingredients: Vec<(i32, f64)>) -> CreateBookingParams {
    CreateBookingParams {
        client_name: "Andre Campbell".to_string(),
        client_email: "andre@example.com".to_string(),
        client_phone: Some("+18765550123".to_string()),
        event_date: (Utc::now() + Duration::days(14)).date_naive(),
        event_type: "Wedding dinner".to_string(),
        location: "Port Antonio".to_string(),
        guest_count: 40,
        budget_cents: Some(250_000),
        dietary_notes: None,
        ingredients,
    }
}

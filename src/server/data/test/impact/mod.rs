use chrono::Utc;
use entity::sea_orm_active_enums::ImpactKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::impact::ImpactRepository, model::impact::CreateImpactMetricParams};

mod exists_for_booking;
mod get_farmer_values;

fn metric(kind: ImpactKind, value: f64) -> CreateImpactMetricParams {
    CreateImpactMetricParams {
        kind,
        value,
        farmer_id: None,
        booking_id: None,
        note: None,
        recorded_on: Utc::now().date_naive(),
    }
}

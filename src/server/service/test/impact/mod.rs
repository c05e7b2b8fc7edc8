use chrono::Utc;
use entity::sea_orm_active_enums::ImpactKind;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::impact::CreateImpactMetricParams, service::impact::ImpactService,
};

mod leaderboard;
mod summary;

fn metric(kind: ImpactKind, value: f64, farmer_id: Option<i32>) -> CreateImpactMetricParams {
    CreateImpactMetricParams {
        kind,
        value,
        farmer_id,
        booking_id: None,
        note: None,
        recorded_on: Utc::now().date_naive(),
    }
}

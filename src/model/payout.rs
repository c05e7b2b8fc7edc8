use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::assignment::ProviderKindDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatusDto {
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PayoutDto {
    pub id: i32,
    pub assignment_id: i32,
    pub booking_id: i32,
    pub kind: ProviderKindDto,
    pub destination: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PayoutStatusDto,
    pub transfer_id: Option<String>,
    pub failure_reason: Option<String>,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutBlockerDto {
    BookingCancelled,
    AssignmentNotConfirmed,
    MissingPayoutAccount,
    PayoutAccountInactive,
    ProviderInactive,
    ZeroAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayoutOutcomeKindDto {
    Paid,
    AlreadyPaid,
    Failed,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PayoutOutcomeDto {
    pub assignment_id: i32,
    pub outcome: PayoutOutcomeKindDto,
    pub payout: Option<PayoutDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blockers: Vec<PayoutBlockerDto>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PayoutFilterQuery {
    pub status: Option<PayoutStatusDto>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKindDto {
    Chef,
    Farmer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatusDto {
    Offered,
    Accepted,
    Declined,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPayoutStatusDto {
    Unpaid,
    Paid,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub booking_id: i32,
    pub kind: ProviderKindDto,
    /// Chef or farmer ID, depending on `kind`.
    pub provider_id: i32,
    pub status: AssignmentStatusDto,
    pub payout_amount_cents: i64,
    pub payout_status: AssignmentPayoutStatusDto,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAssignmentDto {
    pub kind: ProviderKindDto,
    pub provider_id: i32,
    pub payout_amount_cents: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespondAssignmentDto {
    pub accept: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAssignmentStatusDto {
    pub status: AssignmentStatusDto,
}

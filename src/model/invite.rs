use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::user::UserRoleDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatusDto {
    Pending,
    Accepted,
    Revoked,
    /// Pending invite whose expiry has passed.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InviteDto {
    pub id: i32,
    pub email: String,
    pub role: UserRoleDto,
    pub status: InviteStatusDto,
    pub phone: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub last_sent_at: Option<DateTime<Utc>>,
    pub send_count: i32,
    pub accepted_user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Result of creating or resending an invite.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InviteResultDto {
    pub invite: InviteDto,
    /// Whether this call created the invite.
    pub created: bool,
    /// Whether an invite message was sent by this call.
    pub sent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateInviteDto {
    pub email: String,
    pub role: UserRoleDto,
    pub phone: Option<String>,
}

/// Invite details visible to the invitee before accepting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicInviteDto {
    pub email: String,
    pub role: UserRoleDto,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AcceptInviteDto {
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InviteFilterQuery {
    /// Only invites with this status; `expired` selects pending invites past their expiry
    pub status: Option<InviteStatusDto>,
}

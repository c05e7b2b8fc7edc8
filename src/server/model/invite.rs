//! Invite domain models and parameters.
//!
//! Invites are the only way to create accounts. A pending invite counts as expired once
//! its `expires_at` has passed; expiry is derived on read rather than stored.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{InviteStatus, UserRole};

use crate::{
    model::invite::{
        AcceptInviteDto, CreateInviteDto, InviteDto, InviteResultDto, InviteStatusDto,
        PublicInviteDto,
    },
    server::{
        error::validation::ValidationError,
        util::validate::{Validate, Validator},
    },
};

/// Days an invite stays valid after it is created or its token is rotated.
pub const INVITE_TTL_DAYS: i64 = 7;

/// Minimum seconds between two sends of the same invite.
pub const RESEND_COOLDOWN_SECONDS: i64 = 60;

pub fn invite_ttl() -> Duration {
    Duration::days(INVITE_TTL_DAYS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invite {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub token: String,
    pub status: InviteStatus,
    pub phone: Option<String>,
    pub invited_by: Option<i32>,
    pub expires_at: DateTime<Utc>,
    pub last_sent_at: Option<DateTime<Utc>>,
    pub send_count: i32,
    pub accepted_user_id: Option<i32>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    pub fn from_entity(entity: entity::invite::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            token: entity.token,
            status: entity.status,
            phone: entity.phone,
            invited_by: entity.invited_by,
            expires_at: entity.expires_at,
            last_sent_at: entity.last_sent_at,
            send_count: entity.send_count,
            accepted_user_id: entity.accepted_user_id,
            accepted_at: entity.accepted_at,
            created_at: entity.created_at,
        }
    }

    /// Whether the invite is pending but past its expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == InviteStatus::Pending && self.expires_at <= now
    }

    /// Whether the invite can still be accepted at `now`.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.status == InviteStatus::Pending && self.expires_at > now
    }

    /// Whether the last send happened within the resend cooldown.
    pub fn recently_sent(&self, now: DateTime<Utc>) -> bool {
        self.last_sent_at
            .is_some_and(|sent| now - sent < Duration::seconds(RESEND_COOLDOWN_SECONDS))
    }

    /// Status as presented to API clients, with expiry folded in.
    pub fn display_status(&self, now: DateTime<Utc>) -> InviteStatusDto {
        match self.status {
            InviteStatus::Pending if self.is_expired(now) => InviteStatusDto::Expired,
            InviteStatus::Pending => InviteStatusDto::Pending,
            InviteStatus::Accepted => InviteStatusDto::Accepted,
            InviteStatus::Revoked => InviteStatusDto::Revoked,
        }
    }

    /// Acceptance link sent to the invitee.
    pub fn link(&self, app_url: &str) -> String {
        format!("{}/invite/{}", app_url, self.token)
    }

    pub fn into_dto(self) -> InviteDto {
        InviteDto {
            status: self.display_status(Utc::now()),
            id: self.id,
            email: self.email,
            role: self.role.into(),
            phone: self.phone,
            expires_at: self.expires_at,
            last_sent_at: self.last_sent_at,
            send_count: self.send_count,
            accepted_user_id: self.accepted_user_id,
            created_at: self.created_at,
        }
    }

    pub fn into_public_dto(self) -> PublicInviteDto {
        PublicInviteDto {
            email: self.email,
            role: self.role.into(),
            expires_at: self.expires_at,
        }
    }
}

/// Invite together with what this call did to it.
#[derive(Debug, Clone)]
pub struct InviteResult {
    pub invite: Invite,
    pub created: bool,
    pub sent: bool,
}

impl InviteResult {
    pub fn into_dto(self) -> InviteResultDto {
        InviteResultDto {
            invite: self.invite.into_dto(),
            created: self.created,
            sent: self.sent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInviteParams {
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub invited_by: Option<i32>,
}

impl CreateInviteParams {
    pub fn from_dto(dto: CreateInviteDto, invited_by: Option<i32>) -> Self {
        Self {
            email: crate::server::util::validate::normalize_email(&dto.email),
            role: dto.role.into(),
            phone: crate::server::util::validate::non_blank(dto.phone),
            invited_by,
        }
    }
}

/// Listing filter; `Expired` selects pending invites past their expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteFilter {
    Pending,
    Accepted,
    Revoked,
    Expired,
}

impl From<InviteStatusDto> for InviteFilter {
    fn from(value: InviteStatusDto) -> Self {
        match value {
            InviteStatusDto::Pending => Self::Pending,
            InviteStatusDto::Accepted => Self::Accepted,
            InviteStatusDto::Revoked => Self::Revoked,
            InviteStatusDto::Expired => Self::Expired,
        }
    }
}

impl Validate for CreateInviteDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .email("email", &self.email)
            .phone("phone", self.phone.as_deref())
            .finish()
    }
}

impl Validate for AcceptInviteDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .required("name", &self.name, 100)
            .phone("phone", self.phone.as_deref())
            .finish()
    }
}

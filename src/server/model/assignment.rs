//! Assignment domain models and status rules.
//!
//! An assignment links one provider (chef or farmer) to a booking. Exactly one of the
//! entity's `chef_id` / `farmer_id` columns is set, matching `kind`; the domain model
//! folds them into a single `provider_id`.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AssignmentPayoutStatus, AssignmentStatus, ProviderKind};

use crate::{
    model::assignment::{
        AssignmentDto, AssignmentPayoutStatusDto, AssignmentStatusDto, CreateAssignmentDto,
        ProviderKindDto, RespondAssignmentDto, UpdateAssignmentStatusDto,
    },
    server::{
        error::{internal::InternalError, validation::ValidationError},
        util::validate::{non_blank, Validate, Validator},
    },
};

enum_conversion!(ProviderKind <=> ProviderKindDto { Chef, Farmer });
enum_conversion!(AssignmentStatus <=> AssignmentStatusDto {
    Offered,
    Accepted,
    Declined,
    Confirmed,
    Completed,
    Cancelled
});
enum_conversion!(AssignmentPayoutStatus <=> AssignmentPayoutStatusDto { Unpaid, Paid, Failed });

/// Statuses that occupy a provider.
pub const ACTIVE_STATUSES: [AssignmentStatus; 3] = [
    AssignmentStatus::Offered,
    AssignmentStatus::Accepted,
    AssignmentStatus::Confirmed,
];

/// Whether an assignment in this status still occupies its provider.
pub fn is_active(status: AssignmentStatus) -> bool {
    ACTIVE_STATUSES.contains(&status)
}

/// Whether an assignment may move from `from` to `to`.
///
/// `offered → accepted | declined`, `accepted → confirmed`, `confirmed → completed`,
/// and any non-terminal status may be cancelled.
pub fn can_transition(from: AssignmentStatus, to: AssignmentStatus) -> bool {
    use AssignmentStatus::*;

    match (from, to) {
        (Offered, Accepted) | (Offered, Declined) => true,
        (Accepted, Confirmed) => true,
        (Confirmed, Completed) => true,
        (from, Cancelled) => is_active(from),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: i32,
    pub booking_id: i32,
    pub kind: ProviderKind,
    pub provider_id: i32,
    pub status: AssignmentStatus,
    pub payout_amount_cents: i64,
    pub payout_status: AssignmentPayoutStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Converts an entity model, resolving the provider column that matches `kind`.
    ///
    /// # Returns
    /// - `Ok(Assignment)` - Converted domain model
    /// - `Err(InternalError::AssignmentProviderMissing)` - Provider column for the kind is empty
    pub fn from_entity(entity: entity::assignment::Model) -> Result<Self, InternalError> {
        let provider_id = match entity.kind {
            ProviderKind::Chef => entity.chef_id,
            ProviderKind::Farmer => entity.farmer_id,
        }
        .ok_or(InternalError::AssignmentProviderMissing {
            assignment_id: entity.id,
        })?;

        Ok(Self {
            id: entity.id,
            booking_id: entity.booking_id,
            kind: entity.kind,
            provider_id,
            status: entity.status,
            payout_amount_cents: entity.payout_amount_cents,
            payout_status: entity.payout_status,
            notes: entity.notes,
            created_at: entity.created_at,
            responded_at: entity.responded_at,
        })
    }

    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.id,
            booking_id: self.booking_id,
            kind: self.kind.into(),
            provider_id: self.provider_id,
            status: self.status.into(),
            payout_amount_cents: self.payout_amount_cents,
            payout_status: self.payout_status.into(),
            notes: self.notes,
            created_at: self.created_at,
            responded_at: self.responded_at,
        }
    }
}

/// Chef or farmer profile an assignment points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderRef {
    pub kind: ProviderKind,
    pub id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateAssignmentParams {
    pub booking_id: i32,
    pub provider: ProviderRef,
    pub payout_amount_cents: i64,
    pub notes: Option<String>,
}

impl CreateAssignmentParams {
    pub fn from_dto(booking_id: i32, dto: CreateAssignmentDto) -> Self {
        Self {
            booking_id,
            provider: ProviderRef {
                kind: dto.kind.into(),
                id: dto.provider_id,
            },
            payout_amount_cents: dto.payout_amount_cents,
            notes: non_blank(dto.notes),
        }
    }
}

impl Validate for CreateAssignmentDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .check(
                "payout_amount_cents",
                self.payout_amount_cents >= 0,
                "must be zero or greater",
            )
            .check(
                "notes",
                self.notes
                    .as_deref()
                    .is_none_or(|n| n.chars().count() <= 1000),
                "must be at most 1000 characters",
            )
            .finish()
    }
}

impl Validate for RespondAssignmentDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for UpdateAssignmentStatusDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

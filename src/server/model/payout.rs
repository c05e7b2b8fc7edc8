//! Payout domain models and eligibility rules.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AssignmentStatus, BookingStatus, PayoutStatus, ProviderKind};

use crate::{
    model::payout::{PayoutBlockerDto, PayoutDto, PayoutOutcomeDto, PayoutOutcomeKindDto, PayoutStatusDto},
    server::model::{assignment::Assignment, chef::Chef, farmer::Farmer},
};

enum_conversion!(PayoutStatus <=> PayoutStatusDto { Pending, Paid, Failed });

/// Recorded transfer attempt for one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub id: i32,
    pub assignment_id: i32,
    pub booking_id: i32,
    pub kind: ProviderKind,
    /// Payout account the transfer was sent to.
    pub destination: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PayoutStatus,
    pub transfer_id: Option<String>,
    pub failure_reason: Option<String>,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payout {
    pub fn from_entity(entity: entity::payout::Model) -> Self {
        Self {
            id: entity.id,
            assignment_id: entity.assignment_id,
            booking_id: entity.booking_id,
            kind: entity.kind,
            destination: entity.destination,
            amount_cents: entity.amount_cents,
            currency: entity.currency,
            status: entity.status,
            transfer_id: entity.transfer_id,
            failure_reason: entity.failure_reason,
            attempts: entity.attempts,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PayoutDto {
        PayoutDto {
            id: self.id,
            assignment_id: self.assignment_id,
            booking_id: self.booking_id,
            kind: self.kind.into(),
            destination: self.destination,
            amount_cents: self.amount_cents,
            currency: self.currency,
            status: self.status.into(),
            transfer_id: self.transfer_id,
            failure_reason: self.failure_reason,
            attempts: self.attempts,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields recorded on the payout row before a transfer is attempted.
#[derive(Debug, Clone)]
pub struct PayoutAttemptParams {
    pub assignment_id: i32,
    pub booking_id: i32,
    pub kind: ProviderKind,
    pub destination: String,
    pub amount_cents: i64,
    pub currency: String,
}

/// Reason an assignment cannot be paid out yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutBlocker {
    BookingCancelled,
    AssignmentNotConfirmed,
    MissingPayoutAccount,
    PayoutAccountInactive,
    ProviderInactive,
    ZeroAmount,
}

impl PayoutBlocker {
    pub fn into_dto(self) -> PayoutBlockerDto {
        match self {
            Self::BookingCancelled => PayoutBlockerDto::BookingCancelled,
            Self::AssignmentNotConfirmed => PayoutBlockerDto::AssignmentNotConfirmed,
            Self::MissingPayoutAccount => PayoutBlockerDto::MissingPayoutAccount,
            Self::PayoutAccountInactive => PayoutBlockerDto::PayoutAccountInactive,
            Self::ProviderInactive => PayoutBlockerDto::ProviderInactive,
            Self::ZeroAmount => PayoutBlockerDto::ZeroAmount,
        }
    }
}

/// Payout-relevant fields of the chef or farmer behind an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutRecipient {
    pub active: bool,
    pub payout_account_id: Option<String>,
    pub payout_account_active: bool,
}

impl From<&Chef> for PayoutRecipient {
    fn from(chef: &Chef) -> Self {
        Self {
            active: chef.active,
            payout_account_id: chef.payout_account_id.clone(),
            payout_account_active: chef.payout_account_active,
        }
    }
}

impl From<&Farmer> for PayoutRecipient {
    fn from(farmer: &Farmer) -> Self {
        Self {
            active: farmer.active,
            payout_account_id: farmer.payout_account_id.clone(),
            payout_account_active: farmer.payout_account_active,
        }
    }
}

/// Lists every reason the assignment cannot be paid out.
///
/// An empty result means the transfer may proceed. An inactive payout account is only
/// reported when an account ID exists.
pub fn payout_blockers(
    booking_status: BookingStatus,
    assignment: &Assignment,
    recipient: &PayoutRecipient,
) -> Vec<PayoutBlocker> {
    let mut blockers = Vec::new();

    if booking_status == BookingStatus::Cancelled {
        blockers.push(PayoutBlocker::BookingCancelled);
    }
    if !matches!(
        assignment.status,
        AssignmentStatus::Confirmed | AssignmentStatus::Completed
    ) {
        blockers.push(PayoutBlocker::AssignmentNotConfirmed);
    }
    match recipient.payout_account_id.as_deref() {
        None | Some("") => blockers.push(PayoutBlocker::MissingPayoutAccount),
        Some(_) if !recipient.payout_account_active => {
            blockers.push(PayoutBlocker::PayoutAccountInactive)
        }
        Some(_) => {}
    }
    if !recipient.active {
        blockers.push(PayoutBlocker::ProviderInactive);
    }
    if assignment.payout_amount_cents <= 0 {
        blockers.push(PayoutBlocker::ZeroAmount);
    }

    blockers
}

/// Result of processing one assignment's payout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayoutOutcome {
    /// Transfer created during this call.
    Paid(Payout),
    /// A previous call already paid the assignment; nothing was sent.
    AlreadyPaid(Payout),
    /// Provider rejected or could not be reached; may be retried.
    Failed(Payout),
    /// Preconditions not met; nothing was recorded or sent.
    Blocked(Vec<PayoutBlocker>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPayoutOutcome {
    pub assignment_id: i32,
    pub outcome: PayoutOutcome,
}

impl AssignmentPayoutOutcome {
    pub fn into_dto(self) -> PayoutOutcomeDto {
        let (outcome, payout, blockers) = match self.outcome {
            PayoutOutcome::Paid(p) => (PayoutOutcomeKindDto::Paid, Some(p), Vec::new()),
            PayoutOutcome::AlreadyPaid(p) => (PayoutOutcomeKindDto::AlreadyPaid, Some(p), Vec::new()),
            PayoutOutcome::Failed(p) => (PayoutOutcomeKindDto::Failed, Some(p), Vec::new()),
            PayoutOutcome::Blocked(b) => (PayoutOutcomeKindDto::Blocked, None, b),
        };

        PayoutOutcomeDto {
            assignment_id: self.assignment_id,
            outcome,
            payout: payout.map(Payout::into_dto),
            blockers: blockers.into_iter().map(PayoutBlocker::into_dto).collect(),
        }
    }
}

//! Chef and farmer matching rules.
//!
//! Candidate data is gathered by the matching service; the ranking and eligibility rules
//! here are pure so they can be tested without a database.

use std::cmp::Reverse;

use entity::sea_orm_active_enums::ChefTier;

use crate::{
    model::booking::{AutoAssignDto, BookingMatchesDto, ChefMatchDto, FarmerMatchDto},
    server::{
        error::validation::ValidationError,
        model::{chef::Chef, farmer::Farmer},
        util::validate::{Validate, Validator},
    },
};

/// Active assignments at which a provider stops receiving new offers.
pub const MAX_ACTIVE_ASSIGNMENTS: u64 = 5;

/// Minimum chef tier for an event of the given size.
///
/// Up to 20 guests needs an emerging chef, 21 to 60 a certified chef, and larger
/// events a master chef.
pub fn required_tier(guest_count: i32) -> ChefTier {
    match guest_count {
        i32::MIN..=20 => ChefTier::Emerging,
        21..=60 => ChefTier::Certified,
        _ => ChefTier::Master,
    }
}

fn tier_rank(tier: ChefTier) -> u8 {
    match tier {
        ChefTier::Emerging => 0,
        ChefTier::Certified => 1,
        ChefTier::Master => 2,
    }
}

/// Whether a chef can be offered a booking needing `required` tier.
///
/// # Arguments
/// - `chef` - Candidate chef
/// - `required` - Minimum tier for the booking
/// - `workload` - Chef's active assignments across all bookings
/// - `busy_on_date` - Chef already holds an active assignment on another booking that day
pub fn chef_is_eligible(chef: &Chef, required: ChefTier, workload: u64, busy_on_date: bool) -> bool {
    chef.active && chef.tier >= required && !busy_on_date && workload < MAX_ACTIVE_ASSIGNMENTS
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChefCandidate {
    pub chef: Chef,
    pub workload: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmerCandidate {
    pub farmer: Farmer,
    /// Number of the booking's requested ingredients this farmer offers.
    pub coverage: u64,
    pub workload: u64,
}

/// Orders chefs by workload, then closeness to the required tier, then ID.
pub fn rank_chefs(mut candidates: Vec<ChefCandidate>, required: ChefTier) -> Vec<ChefCandidate> {
    candidates.sort_by_key(|c| {
        (
            c.workload,
            tier_rank(c.chef.tier).saturating_sub(tier_rank(required)),
            c.chef.id,
        )
    });
    candidates
}

/// Orders farmers by coverage (most first), then workload, then regenerative first, then ID.
pub fn rank_farmers(mut candidates: Vec<FarmerCandidate>) -> Vec<FarmerCandidate> {
    candidates.sort_by_key(|c| {
        (
            Reverse(c.coverage),
            c.workload,
            !c.farmer.regenerative,
            c.farmer.id,
        )
    });
    candidates
}

#[derive(Debug, Clone)]
pub struct BookingMatches {
    pub booking_id: i32,
    pub required_tier: ChefTier,
    pub chefs: Vec<ChefCandidate>,
    pub farmers: Vec<FarmerCandidate>,
}

impl BookingMatches {
    pub fn into_dto(self) -> BookingMatchesDto {
        BookingMatchesDto {
            booking_id: self.booking_id,
            required_tier: self.required_tier.into(),
            chefs: self
                .chefs
                .into_iter()
                .map(|c| ChefMatchDto {
                    chef: c.chef.into_public_dto(),
                    workload: c.workload,
                })
                .collect(),
            farmers: self
                .farmers
                .into_iter()
                .map(|f| FarmerMatchDto {
                    farmer: f.farmer.into_public_dto(),
                    coverage: f.coverage,
                    workload: f.workload,
                })
                .collect(),
        }
    }
}

impl Validate for AutoAssignDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .check(
                "payout_amount_cents",
                self.payout_amount_cents >= 0,
                "must be zero or greater",
            )
            .finish()
    }
}

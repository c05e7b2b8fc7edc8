//! Candidate search for a booking.
//!
//! Gathers chefs, farmers, workloads, and supply data, then applies the ranking rules
//! in `model::matching`.

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::ProviderKind;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        assignment::AssignmentRepository, booking::BookingRepository, chef::ChefRepository,
        farmer::FarmerRepository,
    },
    error::AppError,
    model::{
        booking::Booking,
        matching::{
            chef_is_eligible, rank_chefs, rank_farmers, required_tier, BookingMatches,
            ChefCandidate, FarmerCandidate,
        },
    },
};

pub struct MatchingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks chefs and farmers who could serve a booking.
    ///
    /// # Returns
    /// - `Ok(BookingMatches)` - Ranked candidates, best first; either list may be empty
    /// - `Err(AppError::NotFound)` - Unknown booking
    pub async fn find_matches(&self, booking_id: i32) -> Result<BookingMatches, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let required = required_tier(booking.guest_count);
        let chefs = self.chef_candidates(&booking).await?;
        let farmers = self.farmer_candidates(&booking).await?;

        Ok(BookingMatches {
            booking_id: booking.id,
            required_tier: required,
            chefs: rank_chefs(chefs, required),
            farmers: rank_farmers(farmers),
        })
    }

    async fn chef_candidates(&self, booking: &Booking) -> Result<Vec<ChefCandidate>, AppError> {
        let required = required_tier(booking.guest_count);
        let assignments = AssignmentRepository::new(self.db);

        let workloads = assignments.get_active_workloads(ProviderKind::Chef).await?;
        let busy = assignments
            .get_chefs_busy_on(booking.event_date, booking.id)
            .await?;

        let candidates = ChefRepository::new(self.db)
            .get_active()
            .await?
            .into_iter()
            .filter_map(|chef| {
                let workload = workloads.get(&chef.id).copied().unwrap_or(0);
                chef_is_eligible(&chef, required, workload, busy.contains(&chef.id))
                    .then_some(ChefCandidate { chef, workload })
            })
            .collect();

        Ok(candidates)
    }

    async fn farmer_candidates(&self, booking: &Booking) -> Result<Vec<FarmerCandidate>, AppError> {
        let requested = BookingRepository::new(self.db)
            .get_requested_ingredient_ids(booking.id)
            .await?;
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let farmers = FarmerRepository::new(self.db);

        let mut offered: HashMap<i32, HashSet<i32>> = HashMap::new();
        for (farmer_id, ingredient_id) in farmers.get_available_supply(&requested).await? {
            offered.entry(farmer_id).or_default().insert(ingredient_id);
        }

        let workloads = AssignmentRepository::new(self.db)
            .get_active_workloads(ProviderKind::Farmer)
            .await?;

        let candidates = farmers
            .get_active()
            .await?
            .into_iter()
            .filter_map(|farmer| {
                let coverage = offered.get(&farmer.id)?.len() as u64;
                let workload = workloads.get(&farmer.id).copied().unwrap_or(0);
                Some(FarmerCandidate {
                    farmer,
                    coverage,
                    workload,
                })
            })
            .collect();

        Ok(candidates)
    }
}

//! Assigning chefs and farmers to bookings and tracking their responses.

use std::collections::HashSet;

use entity::sea_orm_active_enums::{AssignmentStatus, ProviderKind, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        assignment::AssignmentRepository, booking::BookingRepository, chef::ChefRepository,
        farmer::FarmerRepository,
    },
    error::AppError,
    model::{
        assignment::{can_transition, is_active, Assignment, CreateAssignmentParams, ProviderRef},
        booking::{accepts_assignments, Booking},
        user::User,
    },
    provider::notify::{send_sms_best_effort, Notifier},
    service::matching::MatchingService,
};

/// Contact details of the provider behind an assignment.
struct ProviderContact {
    active: bool,
    phone: Option<String>,
}

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Offers a booking to a chef or farmer.
    ///
    /// The provider is texted about the offer when a phone is on file.
    ///
    /// # Returns
    /// - `Ok(Assignment)` - The offered assignment
    /// - `Err(AppError::NotFound)` - Unknown booking or provider
    /// - `Err(AppError::Conflict)` - Booking is completed or cancelled, provider is
    ///   inactive, or the provider already holds an active assignment on the booking
    pub async fn assign(&self, params: CreateAssignmentParams) -> Result<Assignment, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(params.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !accepts_assignments(booking.status) {
            return Err(AppError::Conflict(format!(
                "Booking is {:?} and no longer accepts assignments",
                booking.status
            )));
        }

        let contact = self.provider_contact(params.provider).await?;
        if !contact.active {
            return Err(AppError::Conflict("Provider is inactive".to_string()));
        }

        let repo = AssignmentRepository::new(self.db);
        if repo.has_active_for(booking.id, params.provider).await? {
            return Err(AppError::Conflict(
                "Provider already has an active assignment on this booking".to_string(),
            ));
        }

        let assignment = repo.create(params).await?;
        tracing::info!(
            "Offered booking {} to {:?} {}",
            booking.id,
            assignment.kind,
            assignment.provider_id
        );

        if let Some(phone) = contact.phone.as_deref() {
            send_sms_best_effort(self.notifier, phone, &offer_message(&booking)).await;
        }

        Ok(assignment)
    }

    /// Offers the booking to the best-ranked eligible chef.
    ///
    /// Chefs already holding an active assignment on this booking are passed over.
    ///
    /// # Returns
    /// - `Ok(Assignment)` - Assignment offered to the top chef
    /// - `Err(AppError::Conflict)` - No eligible chef is available
    pub async fn auto_assign_chef(
        &self,
        booking_id: i32,
        payout_amount_cents: i64,
    ) -> Result<Assignment, AppError> {
        let matches = MatchingService::new(self.db).find_matches(booking_id).await?;

        let on_booking: HashSet<i32> = AssignmentRepository::new(self.db)
            .get_by_booking(booking_id)
            .await?
            .into_iter()
            .filter(|a| a.kind == ProviderKind::Chef && is_active(a.status))
            .map(|a| a.provider_id)
            .collect();

        let chef = matches
            .chefs
            .into_iter()
            .find(|candidate| !on_booking.contains(&candidate.chef.id))
            .ok_or_else(|| {
                AppError::Conflict("No eligible chef is available for this booking".to_string())
            })?;

        self.assign(CreateAssignmentParams {
            booking_id,
            provider: ProviderRef {
                kind: ProviderKind::Chef,
                id: chef.chef.id,
            },
            payout_amount_cents,
            notes: None,
        })
        .await
    }

    /// Moves an assignment to a new status on behalf of an admin.
    pub async fn update_status(
        &self,
        id: i32,
        status: AssignmentStatus,
    ) -> Result<Assignment, AppError> {
        let repo = AssignmentRepository::new(self.db);

        let assignment = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        if !can_transition(assignment.status, status) {
            return Err(AppError::Conflict(format!(
                "Cannot change assignment status from {:?} to {:?}",
                assignment.status, status
            )));
        }

        repo.update_status(id, status, false)
            .await?
            .ok_or_else(not_found)
    }

    /// Records a provider's answer to an offer.
    ///
    /// # Returns
    /// - `Ok(Assignment)` - Accepted or declined assignment
    /// - `Err(AppError::NotFound)` - Unknown assignment or one belonging to someone else
    /// - `Err(AppError::Conflict)` - The assignment is no longer an open offer
    pub async fn respond(
        &self,
        provider: ProviderRef,
        id: i32,
        accept: bool,
    ) -> Result<Assignment, AppError> {
        let repo = AssignmentRepository::new(self.db);

        let assignment = repo
            .find_by_id(id)
            .await?
            .filter(|a| a.kind == provider.kind && a.provider_id == provider.id)
            .ok_or_else(not_found)?;

        if assignment.status != AssignmentStatus::Offered {
            return Err(AppError::Conflict(
                "Assignment is no longer awaiting a response".to_string(),
            ));
        }

        let status = if accept {
            AssignmentStatus::Accepted
        } else {
            AssignmentStatus::Declined
        };

        let assignment = repo
            .update_status(id, status, true)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Assignment {} {:?} by provider", assignment.id, status);

        Ok(assignment)
    }

    pub async fn list_for_provider(&self, provider: ProviderRef) -> Result<Vec<Assignment>, AppError> {
        AssignmentRepository::new(self.db)
            .get_by_provider(provider)
            .await
    }

    /// Resolves the chef or farmer profile linked to a signed-in user.
    ///
    /// # Returns
    /// - `Ok(ProviderRef)` - The user's provider profile
    /// - `Err(AppError::NotFound)` - User is not a chef or farmer, or has no profile
    pub async fn provider_for(&self, user: &User) -> Result<ProviderRef, AppError> {
        let missing = || AppError::NotFound("No provider profile for this account".to_string());

        match user.role {
            UserRole::Chef => {
                let chef = ChefRepository::new(self.db)
                    .find_by_user_id(user.id)
                    .await?
                    .ok_or_else(missing)?;
                Ok(ProviderRef {
                    kind: ProviderKind::Chef,
                    id: chef.id,
                })
            }
            UserRole::Farmer => {
                let farmer = FarmerRepository::new(self.db)
                    .find_by_user_id(user.id)
                    .await?
                    .ok_or_else(missing)?;
                Ok(ProviderRef {
                    kind: ProviderKind::Farmer,
                    id: farmer.id,
                })
            }
            UserRole::Admin | UserRole::Partner => Err(missing()),
        }
    }

    async fn provider_contact(&self, provider: ProviderRef) -> Result<ProviderContact, AppError> {
        let contact = match provider.kind {
            ProviderKind::Chef => ChefRepository::new(self.db)
                .find_by_id(provider.id)
                .await?
                .map(|chef| ProviderContact {
                    active: chef.active,
                    phone: chef.phone,
                }),
            ProviderKind::Farmer => FarmerRepository::new(self.db)
                .find_by_id(provider.id)
                .await?
                .map(|farmer| ProviderContact {
                    active: farmer.active,
                    phone: farmer.phone,
                }),
        };

        contact.ok_or_else(|| AppError::NotFound("Provider not found".to_string()))
    }
}

fn offer_message(booking: &Booking) -> String {
    format!(
        "Bornfidis Provisions: new offer for a {} on {} in {} ({} guests). \
         Sign in to accept or decline.",
        booking.event_type, booking.event_date, booking.location, booking.guest_count
    )
}

fn not_found() -> AppError {
    AppError::NotFound("Assignment not found".to_string())
}

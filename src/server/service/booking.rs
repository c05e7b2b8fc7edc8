//! Booking intake and lifecycle.
//!
//! Notifications sent here are courtesy messages: a failed SMS or email is logged and
//! never fails the booking.

use entity::sea_orm_active_enums::{BookingStatus, ImpactKind};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        assignment::AssignmentRepository, booking::BookingRepository,
        impact::ImpactRepository, ingredient::IngredientRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        booking::{can_transition, Booking, BookingDetail, CreateBookingParams},
        impact::CreateImpactMetricParams,
        page::Page,
    },
    provider::notify::{send_email_best_effort, send_sms_best_effort, Notifier},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    admin_email: Option<&'a str>,
}

impl<'a> BookingService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a dyn Notifier,
        admin_email: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            notifier,
            admin_email,
        }
    }

    /// Records a booking request from a client.
    ///
    /// Sends an SMS confirmation to the client when a phone is given and an email to
    /// the admin address when configured.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The pending booking
    /// - `Err(AppError::ValidationErr)` - A requested ingredient does not exist
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let ids: Vec<i32> = params.ingredients.iter().map(|(id, _)| *id).collect();
        let existing = IngredientRepository::new(self.db).existing_ids(&ids).await?;

        if let Some(unknown) = ids.iter().find(|id| !existing.contains(id)) {
            return Err(ValidationError::single(
                "ingredients",
                format!("unknown ingredient id {}", unknown),
            )
            .into());
        }

        let booking = BookingRepository::new(self.db).create(params).await?;
        tracing::info!(
            "New booking {} for {} on {}",
            booking.id,
            booking.guest_count,
            booking.event_date
        );

        if let Some(phone) = booking.client_phone.as_deref() {
            let body = format!(
                "Thank you, {}! Bornfidis Provisions received your booking request for {}. \
                 We'll be in touch soon.",
                booking.client_name, booking.event_date
            );
            send_sms_best_effort(self.notifier, phone, &body).await;
        }

        if let Some(admin_email) = self.admin_email {
            let body = format!(
                "Booking #{}\nClient: {} <{}>\nEvent: {} on {}\nLocation: {}\nGuests: {}",
                booking.id,
                booking.client_name,
                booking.client_email,
                booking.event_type,
                booking.event_date,
                booking.location,
                booking.guest_count
            );
            send_email_best_effort(self.notifier, admin_email, "New booking request", &body)
                .await;
        }

        Ok(booking)
    }

    pub async fn list(
        &self,
        status: Option<BookingStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Booking>, AppError> {
        let (bookings, total) = BookingRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Page::new(bookings, total, page, per_page))
    }

    /// Gets a booking with its requested ingredients and assignments.
    pub async fn get_detail(&self, id: i32) -> Result<BookingDetail, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo.find_by_id(id).await?.ok_or_else(not_found)?;
        let ingredients = repo.get_ingredients(id).await?;
        let assignments = AssignmentRepository::new(self.db).get_by_booking(id).await?;

        Ok(BookingDetail {
            booking,
            ingredients,
            assignments,
        })
    }

    /// Moves a booking to a new status.
    ///
    /// Completing a booking records a `meals_served` metric equal to its guest count,
    /// once per booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Updated booking
    /// - `Err(AppError::NotFound)` - Unknown booking
    /// - `Err(AppError::Conflict)` - Transition not allowed
    pub async fn update_status(&self, id: i32, status: BookingStatus) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        if !can_transition(booking.status, status) {
            return Err(AppError::Conflict(format!(
                "Cannot change booking status from {:?} to {:?}",
                booking.status, status
            )));
        }

        let booking = repo.update_status(id, status).await?.ok_or_else(not_found)?;
        tracing::info!("Booking {} is now {:?}", booking.id, booking.status);

        if booking.status == BookingStatus::Completed {
            self.record_meals_served(&booking).await?;
        }

        Ok(booking)
    }

    async fn record_meals_served(&self, booking: &Booking) -> Result<(), AppError> {
        let impact = ImpactRepository::new(self.db);

        if impact
            .exists_for_booking(booking.id, ImpactKind::MealsServed)
            .await?
        {
            return Ok(());
        }

        impact
            .create(CreateImpactMetricParams {
                kind: ImpactKind::MealsServed,
                value: booking.guest_count as f64,
                farmer_id: None,
                booking_id: Some(booking.id),
                note: None,
                recorded_on: booking.event_date,
            })
            .await?;

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Booking not found".to_string())
}

//! Booking domain models, parameters and status rules.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::BookingStatus;

use crate::{
    model::booking::{
        BookingDetailDto, BookingDto, BookingIngredientDto, BookingStatusDto, CreateBookingDto,
        UpdateBookingStatusDto,
    },
    server::{
        error::validation::ValidationError,
        model::assignment::Assignment,
        util::validate::{non_blank, normalize_email, Validate, Validator},
    },
};

enum_conversion!(BookingStatus <=> BookingStatusDto {
    Pending,
    Confirmed,
    Completed,
    Cancelled
});

/// Guest count bounds accepted for a booking.
pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 500;

/// Whether a booking may move from `from` to `to`.
///
/// Bookings move `pending → confirmed → completed`, and may be cancelled while
/// pending or confirmed.
pub fn can_transition(from: BookingStatus, to: BookingStatus) -> bool {
    use BookingStatus::*;

    matches!(
        (from, to),
        (Pending, Confirmed) | (Confirmed, Completed) | (Pending, Cancelled) | (Confirmed, Cancelled)
    )
}

/// Whether providers may still be assigned to a booking in this status.
pub fn accepts_assignments(status: BookingStatus) -> bool {
    matches!(status, BookingStatus::Pending | BookingStatus::Confirmed)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_date: NaiveDate,
    pub event_type: String,
    pub location: String,
    pub guest_count: i32,
    pub budget_cents: Option<i64>,
    pub dietary_notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            client_name: entity.client_name,
            client_email: entity.client_email,
            client_phone: entity.client_phone,
            event_date: entity.event_date,
            event_type: entity.event_type,
            location: entity.location,
            guest_count: entity.guest_count,
            budget_cents: entity.budget_cents,
            dietary_notes: entity.dietary_notes,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            client_name: self.client_name,
            client_email: self.client_email,
            client_phone: self.client_phone,
            event_date: self.event_date,
            event_type: self.event_type,
            location: self.location,
            guest_count: self.guest_count,
            budget_cents: self.budget_cents,
            dietary_notes: self.dietary_notes,
            status: self.status.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Requested ingredient joined with its catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingIngredient {
    pub ingredient_id: i32,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

impl BookingIngredient {
    pub fn from_entity(
        entity: entity::booking_ingredient::Model,
        ingredient: entity::ingredient::Model,
    ) -> Self {
        Self {
            ingredient_id: entity.ingredient_id,
            name: ingredient.name,
            unit: ingredient.unit,
            quantity: entity.quantity,
        }
    }

    pub fn into_dto(self) -> BookingIngredientDto {
        BookingIngredientDto {
            ingredient_id: self.ingredient_id,
            name: self.name,
            unit: self.unit,
            quantity: self.quantity,
        }
    }
}

/// Booking with its requested ingredients and provider assignments.
#[derive(Debug, Clone)]
pub struct BookingDetail {
    pub booking: Booking,
    pub ingredients: Vec<BookingIngredient>,
    pub assignments: Vec<Assignment>,
}

impl BookingDetail {
    pub fn into_dto(self) -> BookingDetailDto {
        BookingDetailDto {
            booking: self.booking.into_dto(),
            ingredients: self
                .ingredients
                .into_iter()
                .map(BookingIngredient::into_dto)
                .collect(),
            assignments: self
                .assignments
                .into_iter()
                .map(Assignment::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_date: NaiveDate,
    pub event_type: String,
    pub location: String,
    pub guest_count: i32,
    pub budget_cents: Option<i64>,
    pub dietary_notes: Option<String>,
    /// `(ingredient_id, quantity)` pairs.
    pub ingredients: Vec<(i32, f64)>,
}

impl CreateBookingParams {
    pub fn from_dto(dto: CreateBookingDto) -> Self {
        Self {
            client_name: dto.client_name.trim().to_string(),
            client_email: normalize_email(&dto.client_email),
            client_phone: non_blank(dto.client_phone),
            event_date: dto.event_date,
            event_type: dto.event_type.trim().to_string(),
            location: dto.location.trim().to_string(),
            guest_count: dto.guest_count,
            budget_cents: dto.budget_cents,
            dietary_notes: non_blank(dto.dietary_notes),
            ingredients: dto
                .ingredients
                .into_iter()
                .map(|i| (i.ingredient_id, i.quantity))
                .collect(),
        }
    }
}

impl Validate for CreateBookingDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let today = Utc::now().date_naive();
        let mut seen = HashSet::new();
        let mut validator = Validator::new();

        validator
            .required("client_name", &self.client_name, 100)
            .email("client_email", &self.client_email)
            .phone("client_phone", self.client_phone.as_deref())
            .check(
                "event_date",
                self.event_date >= today,
                "must not be in the past",
            )
            .required("event_type", &self.event_type, 100)
            .required("location", &self.location, 200)
            .range("guest_count", self.guest_count, MIN_GUESTS, MAX_GUESTS)
            .check(
                "budget_cents",
                self.budget_cents.is_none_or(|b| b >= 0),
                "must be zero or greater",
            )
            .check(
                "dietary_notes",
                self.dietary_notes
                    .as_deref()
                    .is_none_or(|n| n.chars().count() <= 2000),
                "must be at most 2000 characters",
            );

        for (i, item) in self.ingredients.iter().enumerate() {
            validator.check(
                &format!("ingredients[{}].quantity", i),
                item.quantity.is_finite() && item.quantity > 0.0,
                "must be greater than zero",
            );
            validator.check(
                &format!("ingredients[{}].ingredient_id", i),
                seen.insert(item.ingredient_id),
                "is listed more than once",
            );
        }

        validator.finish()
    }
}

impl Validate for UpdateBookingStatusDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

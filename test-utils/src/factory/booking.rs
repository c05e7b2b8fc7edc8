//! Booking factory for creating test booking requests.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    client_name: String,
    client_email: String,
    client_phone: Option<String>,
    event_date: NaiveDate,
    guest_count: i32,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - client: `"Client {id}"` / `"client{id}@example.com"`, no phone
    /// - event_date: 30 days from today
    /// - guest_count: `12`
    /// - status: `BookingStatus::Pending`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            client_name: format!("Client {}", id),
            client_email: format!("client{}@example.com", id),
            client_phone: None,
            event_date: (Utc::now() + Duration::days(30)).date_naive(),
            guest_count: 12,
            status: BookingStatus::Pending,
        }
    }

    pub fn client_phone(mut self, phone: impl Into<String>) -> Self {
        self.client_phone = Some(phone.into());
        self
    }

    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn guest_count(mut self, guest_count: i32) -> Self {
        self.guest_count = guest_count;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            client_name: ActiveValue::Set(self.client_name),
            client_email: ActiveValue::Set(self.client_email),
            client_phone: ActiveValue::Set(self.client_phone),
            event_date: ActiveValue::Set(self.event_date),
            event_type: ActiveValue::Set("private dinner".to_string()),
            location: ActiveValue::Set("Kingston".to_string()),
            guest_count: ActiveValue::Set(self.guest_count),
            budget_cents: ActiveValue::Set(None),
            dietary_notes: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values.
pub async fn create_booking(db: &DatabaseConnection) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db).build().await
}

/// Adds a requested ingredient to a booking.
pub async fn create_booking_ingredient(
    db: &DatabaseConnection,
    booking_id: i32,
    ingredient_id: i32,
) -> Result<entity::booking_ingredient::Model, DbErr> {
    entity::booking_ingredient::ActiveModel {
        booking_id: ActiveValue::Set(booking_id),
        ingredient_id: ActiveValue::Set(ingredient_id),
        quantity: ActiveValue::Set(1.0),
    }
    .insert(db)
    .await
}

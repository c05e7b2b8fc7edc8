//! Booking data repository.
//!
//! A booking is stored together with the ingredients the client requested. Status
//! transitions are validated by the service layer; this repository only persists them.

use chrono::Utc;
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::booking::{Booking, BookingIngredient, CreateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking and its requested ingredients in one transaction.
    ///
    /// # Arguments
    /// - `params` - Booking fields and `(ingredient_id, quantity)` pairs; ingredient IDs
    ///   must already be known to exist
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let booking = entity::booking::ActiveModel {
            client_name: ActiveValue::Set(params.client_name),
            client_email: ActiveValue::Set(params.client_email),
            client_phone: ActiveValue::Set(params.client_phone),
            event_date: ActiveValue::Set(params.event_date),
            event_type: ActiveValue::Set(params.event_type),
            location: ActiveValue::Set(params.location),
            guest_count: ActiveValue::Set(params.guest_count),
            budget_cents: ActiveValue::Set(params.budget_cents),
            dietary_notes: ActiveValue::Set(params.dietary_notes),
            status: ActiveValue::Set(BookingStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !params.ingredients.is_empty() {
            let models = params.ingredients.into_iter().map(|(ingredient_id, quantity)| {
                entity::booking_ingredient::ActiveModel {
                    booking_id: ActiveValue::Set(booking.id),
                    ingredient_id: ActiveValue::Set(ingredient_id),
                    quantity: ActiveValue::Set(quantity),
                }
            });

            entity::prelude::BookingIngredient::insert_many(models)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(Booking::from_entity(booking))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets paginated bookings with the latest event date first.
    ///
    /// # Arguments
    /// - `status` - Only return bookings in this status when set
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of bookings per page
    ///
    /// # Returns
    /// - `Ok((bookings, total))` - Bookings for the requested page and total matching count
    pub async fn get_paginated(
        &self,
        status: Option<BookingStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let mut query = entity::prelude::Booking::find();
        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::booking::Column::EventDate)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let bookings = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect();

        Ok((bookings, total))
    }

    /// Sets the booking status and bumps `updated_at`.
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)))
    }

    /// Gets the booking's requested ingredients joined with their catalog entries.
    pub async fn get_ingredients(&self, booking_id: i32) -> Result<Vec<BookingIngredient>, DbErr> {
        let rows = entity::prelude::BookingIngredient::find()
            .filter(entity::booking_ingredient::Column::BookingId.eq(booking_id))
            .find_also_related(entity::prelude::Ingredient)
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, ingredient)| {
                ingredient.map(|ingredient| BookingIngredient::from_entity(item, ingredient))
            })
            .collect())
    }

    pub async fn get_requested_ingredient_ids(&self, booking_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::BookingIngredient::find()
            .select_only()
            .column(entity::booking_ingredient::Column::IngredientId)
            .filter(entity::booking_ingredient::Column::BookingId.eq(booking_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets IDs of all bookings in a status.
    pub async fn get_ids_by_status(&self, status: BookingStatus) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::Id)
            .filter(entity::booking::Column::Status.eq(status))
            .into_tuple()
            .all(self.db)
            .await
    }
}

//! Assignment data repository.
//!
//! Assignments link a booking to exactly one chef or farmer. The provider lives in
//! `chef_id` or `farmer_id` depending on `kind`; conversion to the domain model
//! resolves it into a single `provider_id`, which is why these methods return
//! `AppError` rather than `DbErr`.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    AssignmentPayoutStatus, AssignmentStatus, BookingStatus, ProviderKind,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::assignment::{Assignment, CreateAssignmentParams, ProviderRef, ACTIVE_STATUSES},
};

pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an assignment in the `offered` state with an unpaid payout.
    pub async fn create(&self, params: CreateAssignmentParams) -> Result<Assignment, AppError> {
        let (chef_id, farmer_id) = match params.provider.kind {
            ProviderKind::Chef => (Some(params.provider.id), None),
            ProviderKind::Farmer => (None, Some(params.provider.id)),
        };

        let entity = entity::assignment::ActiveModel {
            booking_id: ActiveValue::Set(params.booking_id),
            kind: ActiveValue::Set(params.provider.kind),
            chef_id: ActiveValue::Set(chef_id),
            farmer_id: ActiveValue::Set(farmer_id),
            status: ActiveValue::Set(AssignmentStatus::Offered),
            payout_amount_cents: ActiveValue::Set(params.payout_amount_cents),
            payout_status: ActiveValue::Set(AssignmentPayoutStatus::Unpaid),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            responded_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Assignment::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Assignment>, AppError> {
        let entity = entity::prelude::Assignment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Assignment::from_entity).transpose()?)
    }

    /// Gets all assignments of a booking, oldest first.
    pub async fn get_by_booking(&self, booking_id: i32) -> Result<Vec<Assignment>, AppError> {
        let entities = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await?;

        convert_all(entities)
    }

    /// Gets all assignments of a provider, newest first.
    pub async fn get_by_provider(&self, provider: ProviderRef) -> Result<Vec<Assignment>, AppError> {
        let entities = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::Kind.eq(provider.kind))
            .filter(provider_column(provider.kind).eq(provider.id))
            .order_by_desc(entity::assignment::Column::CreatedAt)
            .order_by_desc(entity::assignment::Column::Id)
            .all(self.db)
            .await?;

        convert_all(entities)
    }

    /// Sets the assignment status.
    ///
    /// # Arguments
    /// - `id` - Assignment ID
    /// - `status` - New status; callers validate the transition
    /// - `responded` - Whether this is the provider's answer to the offer, which
    ///   records `responded_at`
    ///
    /// # Returns
    /// - `Ok(Some(Assignment))` - Updated assignment
    /// - `Ok(None)` - No assignment with the given ID
    pub async fn update_status(
        &self,
        id: i32,
        status: AssignmentStatus,
        responded: bool,
    ) -> Result<Option<Assignment>, AppError> {
        let Some(assignment) = entity::prelude::Assignment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::assignment::ActiveModel = assignment.into();
        active_model.status = ActiveValue::Set(status);
        if responded {
            active_model.responded_at = ActiveValue::Set(Some(Utc::now()));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Assignment::from_entity(entity)?))
    }

    pub async fn set_payout_status(
        &self,
        id: i32,
        payout_status: AssignmentPayoutStatus,
    ) -> Result<(), DbErr> {
        let Some(assignment) = entity::prelude::Assignment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Err(DbErr::RecordNotFound(format!(
                "Assignment with id {} not found",
                id
            )));
        };

        let mut active_model: entity::assignment::ActiveModel = assignment.into();
        active_model.payout_status = ActiveValue::Set(payout_status);
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Counts active assignments per provider of the given kind.
    ///
    /// # Returns
    /// - `Ok(HashMap<provider_id, count>)` - Providers without active assignments are absent
    pub async fn get_active_workloads(&self, kind: ProviderKind) -> Result<HashMap<i32, u64>, DbErr> {
        let entities = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::Kind.eq(kind))
            .filter(entity::assignment::Column::Status.is_in(ACTIVE_STATUSES))
            .all(self.db)
            .await?;

        let mut workloads = HashMap::new();
        for entity in entities {
            let provider_id = match kind {
                ProviderKind::Chef => entity.chef_id,
                ProviderKind::Farmer => entity.farmer_id,
            };
            if let Some(provider_id) = provider_id {
                *workloads.entry(provider_id).or_insert(0) += 1;
            }
        }

        Ok(workloads)
    }

    /// Gets chefs holding an active assignment on another booking with the given event date.
    pub async fn get_chefs_busy_on(
        &self,
        event_date: NaiveDate,
        exclude_booking_id: i32,
    ) -> Result<HashSet<i32>, DbErr> {
        let rows = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::Kind.eq(ProviderKind::Chef))
            .filter(entity::assignment::Column::Status.is_in(ACTIVE_STATUSES))
            .filter(entity::assignment::Column::BookingId.ne(exclude_booking_id))
            .find_also_related(entity::prelude::Booking)
            .filter(entity::booking::Column::EventDate.eq(event_date))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(assignment, _)| assignment.chef_id)
            .collect())
    }

    /// Checks whether the provider already holds an active assignment on the booking.
    pub async fn has_active_for(
        &self,
        booking_id: i32,
        provider: ProviderRef,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::BookingId.eq(booking_id))
            .filter(entity::assignment::Column::Kind.eq(provider.kind))
            .filter(provider_column(provider.kind).eq(provider.id))
            .filter(entity::assignment::Column::Status.is_in(ACTIVE_STATUSES))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets assignments of completed bookings that are payable but not yet paid.
    pub async fn get_unpaid_for_completed_bookings(&self) -> Result<Vec<Assignment>, AppError> {
        let rows = entity::prelude::Assignment::find()
            .filter(
                entity::assignment::Column::Status
                    .is_in([AssignmentStatus::Confirmed, AssignmentStatus::Completed]),
            )
            .filter(entity::assignment::Column::PayoutStatus.ne(AssignmentPayoutStatus::Paid))
            .find_also_related(entity::prelude::Booking)
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed))
            .order_by_asc(entity::assignment::Column::Id)
            .all(self.db)
            .await?;

        convert_all(rows.into_iter().map(|(assignment, _)| assignment).collect())
    }
}

fn provider_column(kind: ProviderKind) -> entity::assignment::Column {
    match kind {
        ProviderKind::Chef => entity::assignment::Column::ChefId,
        ProviderKind::Farmer => entity::assignment::Column::FarmerId,
    }
}

fn convert_all(entities: Vec<entity::assignment::Model>) -> Result<Vec<Assignment>, AppError> {
    entities
        .into_iter()
        .map(|entity| Assignment::from_entity(entity).map_err(AppError::from))
        .collect()
}

//! Payout data repository.
//!
//! There is at most one payout row per assignment. Each transfer attempt reuses the
//! row, so retries never produce a second payout record.

use chrono::Utc;
use entity::sea_orm_active_enums::{PayoutStatus, ProviderKind};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    assignment::ProviderRef,
    payout::{Payout, PayoutAttemptParams},
};

pub struct PayoutRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PayoutRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_assignment(&self, assignment_id: i32) -> Result<Option<Payout>, DbErr> {
        let entity = entity::prelude::Payout::find()
            .filter(entity::payout::Column::AssignmentId.eq(assignment_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Payout::from_entity))
    }

    /// Records the start of a transfer attempt.
    ///
    /// Inserts a `pending` payout for the assignment, or resets the existing one to
    /// `pending` with refreshed destination and amount. Either way `attempts` is
    /// incremented and any previous failure reason is cleared.
    ///
    /// # Returns
    /// - `Ok(Payout)` - The pending payout row
    /// - `Err(DbErr)` - Database error
    pub async fn begin_attempt(&self, params: PayoutAttemptParams) -> Result<Payout, DbErr> {
        let now = Utc::now();

        let existing = entity::prelude::Payout::find()
            .filter(entity::payout::Column::AssignmentId.eq(params.assignment_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(payout) => {
                let attempts = payout.attempts + 1;
                let mut active_model: entity::payout::ActiveModel = payout.into();
                active_model.destination = ActiveValue::Set(params.destination);
                active_model.amount_cents = ActiveValue::Set(params.amount_cents);
                active_model.currency = ActiveValue::Set(params.currency);
                active_model.status = ActiveValue::Set(PayoutStatus::Pending);
                active_model.failure_reason = ActiveValue::Set(None);
                active_model.attempts = ActiveValue::Set(attempts);
                active_model.updated_at = ActiveValue::Set(now);
                active_model.update(self.db).await?
            }
            None => {
                entity::payout::ActiveModel {
                    assignment_id: ActiveValue::Set(params.assignment_id),
                    booking_id: ActiveValue::Set(params.booking_id),
                    kind: ActiveValue::Set(params.kind),
                    destination: ActiveValue::Set(params.destination),
                    amount_cents: ActiveValue::Set(params.amount_cents),
                    currency: ActiveValue::Set(params.currency),
                    status: ActiveValue::Set(PayoutStatus::Pending),
                    transfer_id: ActiveValue::Set(None),
                    failure_reason: ActiveValue::Set(None),
                    attempts: ActiveValue::Set(1),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Payout::from_entity(entity))
    }

    pub async fn mark_paid(&self, id: i32, transfer_id: String) -> Result<Payout, DbErr> {
        let mut active_model = active_model_for(self.db, id).await?;
        active_model.status = ActiveValue::Set(PayoutStatus::Paid);
        active_model.transfer_id = ActiveValue::Set(Some(transfer_id));
        active_model.failure_reason = ActiveValue::Set(None);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Payout::from_entity(active_model.update(self.db).await?))
    }

    pub async fn mark_failed(&self, id: i32, reason: String) -> Result<Payout, DbErr> {
        let mut active_model = active_model_for(self.db, id).await?;
        active_model.status = ActiveValue::Set(PayoutStatus::Failed);
        active_model.failure_reason = ActiveValue::Set(Some(reason));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Payout::from_entity(active_model.update(self.db).await?))
    }

    /// Gets paginated payouts, most recently updated first.
    ///
    /// # Returns
    /// - `Ok((payouts, total))` - Payouts for the requested page and total matching count
    pub async fn get_paginated(
        &self,
        status: Option<PayoutStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Payout>, u64), DbErr> {
        let mut query = entity::prelude::Payout::find();
        if let Some(status) = status {
            query = query.filter(entity::payout::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::payout::Column::UpdatedAt)
            .order_by_desc(entity::payout::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let payouts = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Payout::from_entity)
            .collect();

        Ok((payouts, total))
    }

    /// Gets every payout made to a provider, newest first.
    pub async fn get_by_provider(&self, provider: ProviderRef) -> Result<Vec<Payout>, DbErr> {
        let provider_column = match provider.kind {
            ProviderKind::Chef => entity::assignment::Column::ChefId,
            ProviderKind::Farmer => entity::assignment::Column::FarmerId,
        };

        let rows = entity::prelude::Payout::find()
            .filter(entity::payout::Column::Kind.eq(provider.kind))
            .find_also_related(entity::prelude::Assignment)
            .filter(provider_column.eq(provider.id))
            .order_by_desc(entity::payout::Column::CreatedAt)
            .order_by_desc(entity::payout::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(payout, _)| Payout::from_entity(payout))
            .collect())
    }
}

async fn active_model_for(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::payout::ActiveModel, DbErr> {
    let payout = entity::prelude::Payout::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "Payout with id {} not found",
            id
        )))?;

    Ok(payout.into())
}

//! Impact metric repository.
//!
//! Aggregations are computed by the service from the raw `(kind, value, farmer)` rows
//! returned here.

use chrono::Utc;
use entity::sea_orm_active_enums::ImpactKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::impact::{CreateImpactMetricParams, ImpactMetric};

pub struct ImpactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImpactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateImpactMetricParams) -> Result<ImpactMetric, DbErr> {
        let entity = entity::impact_metric::ActiveModel {
            kind: ActiveValue::Set(params.kind),
            value: ActiveValue::Set(params.value),
            farmer_id: ActiveValue::Set(params.farmer_id),
            booking_id: ActiveValue::Set(params.booking_id),
            note: ActiveValue::Set(params.note),
            recorded_on: ActiveValue::Set(params.recorded_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ImpactMetric::from_entity(entity))
    }

    /// Gets paginated metrics, most recently recorded first.
    ///
    /// # Returns
    /// - `Ok((metrics, total))` - Metrics for the requested page and total matching count
    pub async fn get_paginated(
        &self,
        kind: Option<ImpactKind>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ImpactMetric>, u64), DbErr> {
        let mut query = entity::prelude::ImpactMetric::find();
        if let Some(kind) = kind {
            query = query.filter(entity::impact_metric::Column::Kind.eq(kind));
        }

        let paginator = query
            .order_by_desc(entity::impact_metric::Column::RecordedOn)
            .order_by_desc(entity::impact_metric::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let metrics = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(ImpactMetric::from_entity)
            .collect();

        Ok((metrics, total))
    }

    /// Gets `(kind, value, farmer_id)` for every recorded metric.
    pub async fn get_all_values(&self) -> Result<Vec<(ImpactKind, f64, Option<i32>)>, DbErr> {
        entity::prelude::ImpactMetric::find()
            .select_only()
            .column(entity::impact_metric::Column::Kind)
            .column(entity::impact_metric::Column::Value)
            .column(entity::impact_metric::Column::FarmerId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets farmer-attributed metrics joined with the farmer's name.
    ///
    /// # Returns
    /// - `Ok(Vec<(farmer_id, farmer_name, kind, value)>)` - One entry per metric
    pub async fn get_farmer_values(&self) -> Result<Vec<(i32, String, ImpactKind, f64)>, DbErr> {
        let rows = entity::prelude::ImpactMetric::find()
            .filter(entity::impact_metric::Column::FarmerId.is_not_null())
            .find_also_related(entity::prelude::Farmer)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(metric, farmer)| {
                farmer.map(|farmer| (farmer.id, farmer.name, metric.kind, metric.value))
            })
            .collect())
    }

    /// Checks whether a metric of this kind is already recorded for the booking.
    pub async fn exists_for_booking(&self, booking_id: i32, kind: ImpactKind) -> Result<bool, DbErr> {
        let count = entity::prelude::ImpactMetric::find()
            .filter(entity::impact_metric::Column::BookingId.eq(booking_id))
            .filter(entity::impact_metric::Column::Kind.eq(kind))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

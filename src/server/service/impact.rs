//! Community impact metrics and the scores derived from them.

use std::collections::{BTreeMap, HashSet};

use entity::sea_orm_active_enums::ImpactKind;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::impact::ImpactRepository,
    error::AppError,
    model::{
        impact::{CreateImpactMetricParams, FarmerImpact, ImpactMetric, ImpactSummary, ImpactTotals},
        page::Page,
    },
};

pub struct ImpactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImpactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(&self, params: CreateImpactMetricParams) -> Result<ImpactMetric, AppError> {
        let metric = ImpactRepository::new(self.db).create(params).await?;
        tracing::info!("Recorded {:?} metric of {}", metric.kind, metric.value);

        Ok(metric)
    }

    pub async fn list(
        &self,
        kind: Option<ImpactKind>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ImpactMetric>, AppError> {
        let (metrics, total) = ImpactRepository::new(self.db)
            .get_paginated(kind, page, per_page)
            .await?;

        Ok(Page::new(metrics, total, page, per_page))
    }

    /// Totals every metric and counts the distinct farmers that have any.
    pub async fn summary(&self) -> Result<ImpactSummary, AppError> {
        let values = ImpactRepository::new(self.db).get_all_values().await?;

        let mut totals = ImpactTotals::default();
        let mut farmers = HashSet::new();
        for (kind, value, farmer_id) in values {
            totals.add(kind, value);
            if let Some(farmer_id) = farmer_id {
                farmers.insert(farmer_id);
            }
        }

        Ok(ImpactSummary {
            totals,
            farmers_supported: farmers.len() as u64,
        })
    }

    /// Ranks farmers by their weighted impact score, highest first.
    ///
    /// Ties keep farmer id order.
    pub async fn leaderboard(&self, limit: usize) -> Result<Vec<FarmerImpact>, AppError> {
        let values = ImpactRepository::new(self.db).get_farmer_values().await?;

        let mut by_farmer: BTreeMap<i32, FarmerImpact> = BTreeMap::new();
        for (farmer_id, farmer_name, kind, value) in values {
            by_farmer
                .entry(farmer_id)
                .or_insert_with(|| FarmerImpact {
                    farmer_id,
                    farmer_name,
                    totals: ImpactTotals::default(),
                })
                .totals
                .add(kind, value);
        }

        let mut leaderboard: Vec<FarmerImpact> = by_farmer.into_values().collect();
        leaderboard.sort_by(|a, b| b.score().total_cmp(&a.score()));
        leaderboard.truncate(limit);

        Ok(leaderboard)
    }
}

//! Impact metrics and scoring.
//!
//! The impact score weighs each metric kind so a single number can summarize the
//! program's reach:
//!
//! | Metric               | Weight           |
//! |----------------------|------------------|
//! | meals served         | 1.0 per meal     |
//! | local spend          | 0.5 per dollar   |
//! | produce              | 2.0 per kg       |
//! | regenerative acreage | 10.0 per acre    |
//! | farmers supported    | 25.0 per farmer  |
//!
//! Farmer leaderboard scores use the same weights without the farmers-supported term.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::ImpactKind;

use crate::{
    model::impact::{
        CreateImpactMetricDto, FarmerImpactDto, ImpactKindDto, ImpactMetricDto, ImpactSummaryDto,
        LeaderboardQuery,
    },
    server::{
        error::validation::ValidationError,
        util::validate::{non_blank, Validate, Validator},
    },
};

enum_conversion!(ImpactKind <=> ImpactKindDto {
    MealsServed,
    LocalSpendCents,
    ProduceKg,
    RegenerativeAcres
});

pub const MEAL_WEIGHT: f64 = 1.0;
pub const SPEND_DOLLAR_WEIGHT: f64 = 0.5;
pub const PRODUCE_KG_WEIGHT: f64 = 2.0;
pub const ACRE_WEIGHT: f64 = 10.0;
pub const FARMER_WEIGHT: f64 = 25.0;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactMetric {
    pub id: i32,
    pub kind: ImpactKind,
    pub value: f64,
    pub farmer_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub note: Option<String>,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl ImpactMetric {
    pub fn from_entity(entity: entity::impact_metric::Model) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            value: entity.value,
            farmer_id: entity.farmer_id,
            booking_id: entity.booking_id,
            note: entity.note,
            recorded_on: entity.recorded_on,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ImpactMetricDto {
        ImpactMetricDto {
            id: self.id,
            kind: self.kind.into(),
            value: self.value,
            farmer_id: self.farmer_id,
            booking_id: self.booking_id,
            note: self.note,
            recorded_on: self.recorded_on,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateImpactMetricParams {
    pub kind: ImpactKind,
    pub value: f64,
    pub farmer_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub note: Option<String>,
    pub recorded_on: NaiveDate,
}

impl CreateImpactMetricParams {
    pub fn from_dto(dto: CreateImpactMetricDto) -> Self {
        Self {
            kind: dto.kind.into(),
            value: dto.value,
            farmer_id: dto.farmer_id,
            booking_id: dto.booking_id,
            note: non_blank(dto.note),
            recorded_on: dto.recorded_on.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

/// Sum of metric values per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpactTotals {
    pub meals_served: f64,
    pub local_spend_cents: f64,
    pub produce_kg: f64,
    pub regenerative_acres: f64,
}

impl ImpactTotals {
    pub fn add(&mut self, kind: ImpactKind, value: f64) {
        match kind {
            ImpactKind::MealsServed => self.meals_served += value,
            ImpactKind::LocalSpendCents => self.local_spend_cents += value,
            ImpactKind::ProduceKg => self.produce_kg += value,
            ImpactKind::RegenerativeAcres => self.regenerative_acres += value,
        }
    }

    /// Weighted score of these totals, unrounded.
    pub fn weighted(&self) -> f64 {
        self.meals_served * MEAL_WEIGHT
            + self.local_spend_cents / 100.0 * SPEND_DOLLAR_WEIGHT
            + self.produce_kg * PRODUCE_KG_WEIGHT
            + self.regenerative_acres * ACRE_WEIGHT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactSummary {
    pub totals: ImpactTotals,
    pub farmers_supported: u64,
}

impl ImpactSummary {
    pub fn score(&self) -> f64 {
        round1(self.totals.weighted() + self.farmers_supported as f64 * FARMER_WEIGHT)
    }

    pub fn into_dto(self) -> ImpactSummaryDto {
        ImpactSummaryDto {
            score: self.score(),
            meals_served: self.totals.meals_served,
            local_spend_cents: self.totals.local_spend_cents,
            produce_kg: self.totals.produce_kg,
            regenerative_acres: self.totals.regenerative_acres,
            farmers_supported: self.farmers_supported,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmerImpact {
    pub farmer_id: i32,
    pub farmer_name: String,
    pub totals: ImpactTotals,
}

impl FarmerImpact {
    pub fn score(&self) -> f64 {
        round1(self.totals.weighted())
    }

    pub fn into_dto(self) -> FarmerImpactDto {
        FarmerImpactDto {
            score: self.score(),
            farmer_id: self.farmer_id,
            farmer_name: self.farmer_name,
            local_spend_cents: self.totals.local_spend_cents,
            produce_kg: self.totals.produce_kg,
        }
    }
}

impl Validate for CreateImpactMetricDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .check(
                "value",
                self.value.is_finite() && self.value >= 0.0,
                "must be zero or greater",
            )
            .check(
                "note",
                self.note.as_deref().is_none_or(|n| n.chars().count() <= 500),
                "must be at most 500 characters",
            )
            .finish()
    }
}

impl Validate for LeaderboardQuery {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new().range("limit", self.limit, 1, 100).finish()
    }
}

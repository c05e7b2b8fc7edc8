use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImpactKindDto {
    MealsServed,
    LocalSpendCents,
    ProduceKg,
    RegenerativeAcres,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImpactMetricDto {
    pub id: i32,
    pub kind: ImpactKindDto,
    pub value: f64,
    pub farmer_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub note: Option<String>,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateImpactMetricDto {
    pub kind: ImpactKindDto,
    pub value: f64,
    pub farmer_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub note: Option<String>,
    /// Defaults to today.
    pub recorded_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImpactSummaryDto {
    pub meals_served: f64,
    pub local_spend_cents: f64,
    pub produce_kg: f64,
    pub regenerative_acres: f64,
    pub farmers_supported: u64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FarmerImpactDto {
    pub farmer_id: i32,
    pub farmer_name: String,
    pub local_spend_cents: f64,
    pub produce_kg: f64,
    pub score: f64,
}

fn default_limit() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Maximum number of farmers (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImpactFilterQuery {
    /// Only metrics of this kind
    pub kind: Option<ImpactKindDto>,
}

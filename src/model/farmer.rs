use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FarmerDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub region: String,
    pub acreage: f64,
    pub regenerative: bool,
    pub payout_account_id: Option<String>,
    pub payout_account_active: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Farmer directory entry without contact or payout data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicFarmerDto {
    pub id: i32,
    pub name: String,
    pub region: String,
    pub acreage: f64,
    pub regenerative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FarmerInputDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub region: String,
    #[serde(default)]
    pub acreage: f64,
    #[serde(default)]
    pub regenerative: bool,
    /// Ignored on create.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PayoutAccountDto {
    pub account_id: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FarmerIngredientDto {
    pub ingredient_id: i32,
    pub ingredient_name: String,
    pub unit: String,
    pub price_cents: i64,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FarmerIngredientInputDto {
    pub ingredient_id: i32,
    pub price_cents: i64,
    #[serde(default = "default_active")]
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetFarmerIngredientsDto {
    pub items: Vec<FarmerIngredientInputDto>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActiveFilterQuery {
    /// Only records with this active flag
    pub active: Option<bool>,
}

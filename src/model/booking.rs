use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{
    assignment::AssignmentDto,
    chef::{ChefTierDto, PublicChefDto},
    farmer::PublicFarmerDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatusDto {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
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
    pub status: BookingStatusDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingIngredientInputDto {
    pub ingredient_id: i32,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_date: NaiveDate,
    pub event_type: String,
    pub location: String,
    pub guest_count: i32,
    pub budget_cents: Option<i64>,
    pub dietary_notes: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<BookingIngredientInputDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingIngredientDto {
    pub ingredient_id: i32,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDetailDto {
    pub booking: BookingDto,
    pub ingredients: Vec<BookingIngredientDto>,
    pub assignments: Vec<AssignmentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChefMatchDto {
    pub chef: PublicChefDto,
    /// Number of active assignments the chef currently holds.
    pub workload: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FarmerMatchDto {
    pub farmer: PublicFarmerDto,
    /// Number of the booking's requested ingredients this farmer offers.
    pub coverage: u64,
    pub workload: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingMatchesDto {
    pub booking_id: i32,
    pub required_tier: ChefTierDto,
    pub chefs: Vec<ChefMatchDto>,
    pub farmers: Vec<FarmerMatchDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AutoAssignDto {
    pub payout_amount_cents: i64,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingFilterQuery {
    /// Only bookings with this status
    pub status: Option<BookingStatusDto>,
}

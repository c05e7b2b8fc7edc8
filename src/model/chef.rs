use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChefTierDto {
    Emerging,
    Certified,
    Master,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChefDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tier: ChefTierDto,
    pub specialties: Option<String>,
    pub payout_account_id: Option<String>,
    pub payout_account_active: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicChefDto {
    pub id: i32,
    pub name: String,
    pub tier: ChefTierDto,
    pub specialties: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChefInputDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tier: ChefTierDto,
    pub specialties: Option<String>,
    /// Ignored on create.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub seasonal: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientInputDto {
    pub name: String,
    pub category: String,
    pub unit: String,
    #[serde(default)]
    pub seasonal: bool,
}

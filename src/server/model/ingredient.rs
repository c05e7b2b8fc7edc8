use chrono::{DateTime, Utc};

use crate::{
    model::ingredient::{IngredientDto, IngredientInputDto},
    server::{
        error::validation::ValidationError,
        util::validate::{Validate, Validator},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub seasonal: bool,
    pub created_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn from_entity(entity: entity::ingredient::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            unit: entity.unit,
            seasonal: entity.seasonal,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> IngredientDto {
        IngredientDto {
            id: self.id,
            name: self.name,
            category: self.category,
            unit: self.unit,
            seasonal: self.seasonal,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngredientParams {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub seasonal: bool,
}

impl IngredientParams {
    pub fn from_dto(dto: IngredientInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            category: dto.category.trim().to_lowercase(),
            unit: dto.unit.trim().to_string(),
            seasonal: dto.seasonal,
        }
    }
}

impl Validate for IngredientInputDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .required("name", &self.name, 100)
            .required("category", &self.category, 50)
            .required("unit", &self.unit, 20)
            .finish()
    }
}

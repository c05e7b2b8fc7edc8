//! Farmer domain models and parameters.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    model::farmer::{
        FarmerDto, FarmerIngredientDto, FarmerInputDto, PayoutAccountDto, PublicFarmerDto,
        SetFarmerIngredientsDto,
    },
    server::{
        error::validation::ValidationError,
        util::validate::{non_blank, normalize_email, Validate, Validator},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Farmer {
    pub id: i32,
    /// Linked login account, set when the farmer joined through an invite.
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

impl Farmer {
    pub fn from_entity(entity: entity::farmer::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            region: entity.region,
            acreage: entity.acreage,
            regenerative: entity.regenerative,
            payout_account_id: entity.payout_account_id,
            payout_account_active: entity.payout_account_active,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FarmerDto {
        FarmerDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            region: self.region,
            acreage: self.acreage,
            regenerative: self.regenerative,
            payout_account_id: self.payout_account_id,
            payout_account_active: self.payout_account_active,
            active: self.active,
            created_at: self.created_at,
        }
    }

    /// Directory view without contact or payout details.
    pub fn into_public_dto(self) -> PublicFarmerDto {
        PublicFarmerDto {
            id: self.id,
            name: self.name,
            region: self.region,
            acreage: self.acreage,
            regenerative: self.regenerative,
        }
    }
}

/// Fields shared by farmer create and update.
#[derive(Debug, Clone)]
pub struct FarmerParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub region: String,
    pub acreage: f64,
    pub regenerative: bool,
    pub active: bool,
}

impl FarmerParams {
    pub fn from_dto(dto: FarmerInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: non_blank(dto.phone),
            region: dto.region.trim().to_string(),
            acreage: dto.acreage,
            regenerative: dto.regenerative,
            active: dto.active,
        }
    }
}

/// Payout account details stored on a chef or farmer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutAccountParams {
    pub account_id: Option<String>,
    pub active: bool,
}

impl PayoutAccountParams {
    pub fn from_dto(dto: PayoutAccountDto) -> Self {
        Self {
            account_id: non_blank(dto.account_id),
            active: dto.active,
        }
    }
}

/// Ingredient a farmer offers, joined with the ingredient's name and unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmerIngredient {
    pub ingredient_id: i32,
    pub ingredient_name: String,
    pub unit: String,
    pub price_cents: i64,
    pub available: bool,
}

impl FarmerIngredient {
    pub fn from_entity(
        entity: entity::farmer_ingredient::Model,
        ingredient: entity::ingredient::Model,
    ) -> Self {
        Self {
            ingredient_id: entity.ingredient_id,
            ingredient_name: ingredient.name,
            unit: ingredient.unit,
            price_cents: entity.price_cents,
            available: entity.available,
        }
    }

    pub fn into_dto(self) -> FarmerIngredientDto {
        FarmerIngredientDto {
            ingredient_id: self.ingredient_id,
            ingredient_name: self.ingredient_name,
            unit: self.unit,
            price_cents: self.price_cents,
            available: self.available,
        }
    }
}

/// One row of a farmer's replacement supply list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyItemParams {
    pub ingredient_id: i32,
    pub price_cents: i64,
    pub available: bool,
}

impl SupplyItemParams {
    pub fn from_dto(dto: SetFarmerIngredientsDto) -> Vec<Self> {
        dto.items
            .into_iter()
            .map(|item| Self {
                ingredient_id: item.ingredient_id,
                price_cents: item.price_cents,
                available: item.available,
            })
            .collect()
    }
}

impl Validate for FarmerInputDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .required("name", &self.name, 100)
            .email("email", &self.email)
            .phone("phone", self.phone.as_deref())
            .required("region", &self.region, 100)
            .check(
                "acreage",
                self.acreage.is_finite() && self.acreage >= 0.0,
                "must be zero or greater",
            )
            .finish()
    }
}

impl Validate for PayoutAccountDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let has_account = self
            .account_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty());

        Validator::new()
            .check(
                "account_id",
                has_account || !self.active,
                "is required when the account is active",
            )
            .finish()
    }
}

impl Validate for SetFarmerIngredientsDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        let mut validator = Validator::new();

        for (i, item) in self.items.iter().enumerate() {
            validator.check(
                &format!("items[{}].price_cents", i),
                item.price_cents >= 0,
                "must be zero or greater",
            );
            validator.check(
                &format!("items[{}].ingredient_id", i),
                seen.insert(item.ingredient_id),
                "is listed more than once",
            );
        }

        validator.finish()
    }
}

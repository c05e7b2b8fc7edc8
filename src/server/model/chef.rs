//! Chef domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ChefTier;

use crate::{
    model::chef::{ChefDto, ChefInputDto, ChefTierDto, PublicChefDto},
    server::{
        error::validation::ValidationError,
        util::validate::{non_blank, normalize_email, Validate, Validator},
    },
};

enum_conversion!(ChefTier <=> ChefTierDto { Emerging, Certified, Master });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chef {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tier: ChefTier,
    pub specialties: Option<String>,
    pub payout_account_id: Option<String>,
    pub payout_account_active: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Chef {
    pub fn from_entity(entity: entity::chef::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            tier: entity.tier,
            specialties: entity.specialties,
            payout_account_id: entity.payout_account_id,
            payout_account_active: entity.payout_account_active,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ChefDto {
        ChefDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            tier: self.tier.into(),
            specialties: self.specialties,
            payout_account_id: self.payout_account_id,
            payout_account_active: self.payout_account_active,
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn into_public_dto(self) -> PublicChefDto {
        PublicChefDto {
            id: self.id,
            name: self.name,
            tier: self.tier.into(),
            specialties: self.specialties,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChefParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tier: ChefTier,
    pub specialties: Option<String>,
    pub active: bool,
}

impl ChefParams {
    pub fn from_dto(dto: ChefInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: non_blank(dto.phone),
            tier: dto.tier.into(),
            specialties: non_blank(dto.specialties),
            active: dto.active,
        }
    }
}

impl Validate for ChefInputDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .required("name", &self.name, 100)
            .email("email", &self.email)
            .phone("phone", self.phone.as_deref())
            .check(
                "specialties",
                self.specialties
                    .as_deref()
                    .is_none_or(|s| s.chars().count() <= 500),
                "must be at most 500 characters",
            )
            .finish()
    }
}

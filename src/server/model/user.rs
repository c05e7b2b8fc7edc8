//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{LoginRequestDto, UserDto, UserRoleDto, VerifyLoginDto},
    server::{
        error::validation::ValidationError,
        util::validate::{Validate, Validator},
    },
};

enum_conversion!(UserRole <=> UserRoleDto { Admin, Chef, Farmer, Partner });

/// Lowercase role name used in messages.
pub fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Chef => "chef",
        UserRole::Farmer => "farmer",
        UserRole::Partner => "partner",
    }
}

/// Maximum failed verifications before a login code stops working.
pub const MAX_LOGIN_ATTEMPTS: i32 = 5;

/// Minutes a login code stays valid.
pub const LOGIN_CODE_TTL_MINUTES: i64 = 10;

/// Authenticated account holder.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased email, unique across users.
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            phone: entity.phone,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user from an accepted invite.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl Validate for LoginRequestDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new().email("email", &self.email).finish()
    }
}

impl Validate for VerifyLoginDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let code = self.code.trim();
        Validator::new()
            .email("email", &self.email)
            .check(
                "code",
                code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()),
                "must be a 6-digit code",
            )
            .finish()
    }
}

//! Chef factory for creating test chef profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ChefTier;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test chefs with customizable fields.
pub struct ChefFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    name: String,
    email: String,
    phone: Option<String>,
    tier: ChefTier,
    payout_account_id: Option<String>,
    payout_account_active: bool,
    active: bool,
}

impl<'a> ChefFactory<'a> {
    /// Creates a new ChefFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Chef {id}"`, email `"chef{id}@example.com"`
    /// - tier: `ChefTier::Certified`
    /// - no payout account, active
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            name: format!("Chef {}", id),
            email: format!("chef{}@example.com", id),
            phone: None,
            tier: ChefTier::Certified,
            payout_account_id: None,
            payout_account_active: false,
            active: true,
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn tier(mut self, tier: ChefTier) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the payout account ID and whether it is active.
    pub fn payout_account(mut self, account_id: impl Into<String>, active: bool) -> Self {
        self.payout_account_id = Some(account_id.into());
        self.payout_account_active = active;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the chef entity into the database.
    pub async fn build(self) -> Result<entity::chef::Model, DbErr> {
        entity::chef::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            tier: ActiveValue::Set(self.tier),
            specialties: ActiveValue::Set(None),
            payout_account_id: ActiveValue::Set(self.payout_account_id),
            payout_account_active: ActiveValue::Set(self.payout_account_active),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chef with default values.
pub async fn create_chef(db: &DatabaseConnection) -> Result<entity::chef::Model, DbErr> {
    ChefFactory::new(db).build().await
}

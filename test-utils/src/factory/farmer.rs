//! Farmer factory for creating test farmer profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test farmers with customizable fields.
pub struct FarmerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    name: String,
    email: String,
    phone: Option<String>,
    region: String,
    acreage: f64,
    regenerative: bool,
    payout_account_id: Option<String>,
    payout_account_active: bool,
    active: bool,
}

impl<'a> FarmerFactory<'a> {
    /// Creates a new FarmerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Farmer {id}"`, email `"farmer{id}@example.com"`
    /// - region: `"St. Elizabeth"`, acreage `5.0`, not regenerative
    /// - no payout account, active
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            name: format!("Farmer {}", id),
            email: format!("farmer{}@example.com", id),
            phone: None,
            region: "St. Elizabeth".to_string(),
            acreage: 5.0,
            regenerative: false,
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

    pub fn regenerative(mut self, regenerative: bool) -> Self {
        self.regenerative = regenerative;
        self
    }

    pub fn acreage(mut self, acreage: f64) -> Self {
        self.acreage = acreage;
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

    /// Builds and inserts the farmer entity into the database.
    pub async fn build(self) -> Result<entity::farmer::Model, DbErr> {
        entity::farmer::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            region: ActiveValue::Set(self.region),
            acreage: ActiveValue::Set(self.acreage),
            regenerative: ActiveValue::Set(self.regenerative),
            payout_account_id: ActiveValue::Set(self.payout_account_id),
            payout_account_active: ActiveValue::Set(self.payout_account_active),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a farmer with default values.
pub async fn create_farmer(db: &DatabaseConnection) -> Result<entity::farmer::Model, DbErr> {
    FarmerFactory::new(db).build().await
}

/// Adds an ingredient to a farmer's supply list.
pub async fn create_farmer_ingredient(
    db: &DatabaseConnection,
    farmer_id: i32,
    ingredient_id: i32,
    available: bool,
) -> Result<entity::farmer_ingredient::Model, DbErr> {
    entity::farmer_ingredient::ActiveModel {
        farmer_id: ActiveValue::Set(farmer_id),
        ingredient_id: ActiveValue::Set(ingredient_id),
        price_cents: ActiveValue::Set(250),
        available: ActiveValue::Set(available),
    }
    .insert(db)
    .await
}

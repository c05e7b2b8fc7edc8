//! Farmer profiles, payout accounts, and supply lists.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{farmer::FarmerRepository, ingredient::IngredientRepository},
    error::{validation::ValidationError, AppError},
    model::{
        farmer::{Farmer, FarmerIngredient, FarmerParams, PayoutAccountParams, SupplyItemParams},
        page::Page,
    },
};

pub struct FarmerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FarmerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: FarmerParams) -> Result<Farmer, AppError> {
        let farmer = FarmerRepository::new(self.db).create(params).await?;
        tracing::info!("Created farmer {}", farmer.id);

        Ok(farmer)
    }

    pub async fn update(&self, id: i32, params: FarmerParams) -> Result<Farmer, AppError> {
        FarmerRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get(&self, id: i32) -> Result<Farmer, AppError> {
        FarmerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list(
        &self,
        active: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Farmer>, AppError> {
        let (farmers, total) = FarmerRepository::new(self.db)
            .get_paginated(active, page, per_page)
            .await?;

        Ok(Page::new(farmers, total, page, per_page))
    }

    pub async fn set_payout_account(
        &self,
        id: i32,
        params: PayoutAccountParams,
    ) -> Result<Farmer, AppError> {
        FarmerRepository::new(self.db)
            .set_payout_account(id, params)
            .await?
            .ok_or_else(not_found)
    }

    /// Gets the farmer profile linked to a user account.
    ///
    /// # Returns
    /// - `Ok(Farmer)` - Linked profile
    /// - `Err(AppError::NotFound)` - The user has no farmer profile
    pub async fn get_for_user(&self, user_id: i32) -> Result<Farmer, AppError> {
        FarmerRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No farmer profile for this account".to_string()))
    }

    pub async fn get_ingredients(&self, farmer_id: i32) -> Result<Vec<FarmerIngredient>, AppError> {
        Ok(FarmerRepository::new(self.db)
            .get_ingredients(farmer_id)
            .await?)
    }

    /// Replaces a farmer's supply list.
    ///
    /// # Returns
    /// - `Ok(Vec<FarmerIngredient>)` - The new supply list
    /// - `Err(AppError::ValidationErr)` - An ingredient ID does not exist
    pub async fn set_ingredients(
        &self,
        farmer_id: i32,
        items: Vec<SupplyItemParams>,
    ) -> Result<Vec<FarmerIngredient>, AppError> {
        let ids: Vec<i32> = items.iter().map(|item| item.ingredient_id).collect();
        let existing = IngredientRepository::new(self.db).existing_ids(&ids).await?;

        if let Some(unknown) = ids.iter().find(|id| !existing.contains(id)) {
            return Err(ValidationError::single(
                "items",
                format!("unknown ingredient id {}", unknown),
            )
            .into());
        }

        let repo = FarmerRepository::new(self.db);
        repo.replace_ingredients(farmer_id, items).await?;

        Ok(repo.get_ingredients(farmer_id).await?)
    }

    /// Gets active farmers for the public directory.
    pub async fn get_directory(&self) -> Result<Vec<Farmer>, AppError> {
        Ok(FarmerRepository::new(self.db).get_active().await?)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Farmer not found".to_string())
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::chef::ChefRepository,
    error::AppError,
    model::{
        chef::{Chef, ChefParams},
        farmer::PayoutAccountParams,
        page::Page,
    },
};

pub struct ChefService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChefService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ChefParams) -> Result<Chef, AppError> {
        let chef = ChefRepository::new(self.db).create(params).await?;
        tracing::info!("Created chef {}", chef.id);

        Ok(chef)
    }

    pub async fn update(&self, id: i32, params: ChefParams) -> Result<Chef, AppError> {
        ChefRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get(&self, id: i32) -> Result<Chef, AppError> {
        ChefRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list(
        &self,
        active: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Chef>, AppError> {
        let (chefs, total) = ChefRepository::new(self.db)
            .get_paginated(active, page, per_page)
            .await?;

        Ok(Page::new(chefs, total, page, per_page))
    }

    pub async fn set_payout_account(
        &self,
        id: i32,
        params: PayoutAccountParams,
    ) -> Result<Chef, AppError> {
        ChefRepository::new(self.db)
            .set_payout_account(id, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Chef, AppError> {
        ChefRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No chef profile for this account".to_string()))
    }

    pub async fn get_directory(&self) -> Result<Vec<Chef>, AppError> {
        Ok(ChefRepository::new(self.db).get_active().await?)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Chef not found".to_string())
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{farmer::FarmerRepository, ingredient::IngredientRepository},
    error::AppError,
    model::{
        farmer::Farmer,
        ingredient::{Ingredient, IngredientParams},
    },
};

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an ingredient to the catalog.
    ///
    /// # Returns
    /// - `Ok(Ingredient)` - Created ingredient
    /// - `Err(AppError::Conflict)` - An ingredient with the same name exists, ignoring case
    pub async fn create(&self, params: IngredientParams) -> Result<Ingredient, AppError> {
        let repo = IngredientRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(duplicate_name(&params.name));
        }

        Ok(repo.create(params).await?)
    }

    /// Updates an ingredient; renaming onto another ingredient's name is a conflict.
    pub async fn update(&self, id: i32, params: IngredientParams) -> Result<Ingredient, AppError> {
        let repo = IngredientRepository::new(self.db);

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != id {
                return Err(duplicate_name(&params.name));
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Ingredient not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Ingredient>, AppError> {
        Ok(IngredientRepository::new(self.db).get_all().await?)
    }

    /// Gets active farmers currently offering an ingredient.
    pub async fn get_suppliers(&self, ingredient_id: i32) -> Result<Vec<Farmer>, AppError> {
        if IngredientRepository::new(self.db)
            .find_by_id(ingredient_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Ingredient not found".to_string()));
        }

        Ok(FarmerRepository::new(self.db)
            .get_suppliers(ingredient_id)
            .await?)
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("Ingredient \"{}\" already exists", name))
}

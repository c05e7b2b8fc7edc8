//! Ingredient catalog repository.
//!
//! Ingredient names are unique ignoring case. The catalog is small, so the
//! case-insensitive lookup compares in memory rather than in SQL.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::ingredient::{Ingredient, IngredientParams};

pub struct IngredientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: IngredientParams) -> Result<Ingredient, DbErr> {
        let entity = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category),
            unit: ActiveValue::Set(params.unit),
            seasonal: ActiveValue::Set(params.seasonal),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ingredient::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: IngredientParams,
    ) -> Result<Option<Ingredient>, DbErr> {
        let Some(ingredient) = entity::prelude::Ingredient::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::ingredient::ActiveModel = ingredient.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.category = ActiveValue::Set(params.category);
        active_model.unit = ActiveValue::Set(params.unit);
        active_model.seasonal = ActiveValue::Set(params.seasonal);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Ingredient::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, DbErr> {
        let entity = entity::prelude::Ingredient::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Ingredient::from_entity))
    }

    /// Finds an ingredient whose name equals `name` ignoring case and surrounding whitespace.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, DbErr> {
        let wanted = name.trim().to_lowercase();

        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|ingredient| ingredient.name.to_lowercase() == wanted))
    }

    /// Gets all ingredients ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Ingredient>, DbErr> {
        let entities = entity::prelude::Ingredient::find()
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ingredient::from_entity).collect())
    }

    /// Returns which of the given IDs exist.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i32> = entity::prelude::Ingredient::find()
            .select_only()
            .column(entity::ingredient::Column::Id)
            .filter(entity::ingredient::Column::Id.is_in(ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(found.into_iter().collect())
    }
}

//! Ingredient factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an ingredient named `"Ingredient {id}"` in the `"produce"` category.
pub async fn create_ingredient(
    db: &DatabaseConnection,
) -> Result<entity::ingredient::Model, DbErr> {
    create_named_ingredient(db, format!("Ingredient {}", next_id())).await
}

/// Creates an ingredient with the given name.
pub async fn create_named_ingredient(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::ingredient::Model, DbErr> {
    entity::ingredient::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        category: ActiveValue::Set("produce".to_string()),
        unit: ActiveValue::Set("kg".to_string()),
        seasonal: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

//! Farmer data repository.
//!
//! Covers farmer profiles, payout account details, and the farmer's supply list of
//! ingredients with prices.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::farmer::{
    Farmer, FarmerIngredient, FarmerParams, PayoutAccountParams, SupplyItemParams,
};

pub struct FarmerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FarmerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: FarmerParams) -> Result<Farmer, DbErr> {
        let entity = entity::farmer::ActiveModel {
            user_id: ActiveValue::Set(None),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            region: ActiveValue::Set(params.region),
            acreage: ActiveValue::Set(params.acreage),
            regenerative: ActiveValue::Set(params.regenerative),
            payout_account_id: ActiveValue::Set(None),
            payout_account_active: ActiveValue::Set(false),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Farmer::from_entity(entity))
    }

    /// Updates the profile fields of a farmer.
    ///
    /// # Returns
    /// - `Ok(Some(Farmer))` - Updated farmer
    /// - `Ok(None)` - No farmer with the given ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: FarmerParams) -> Result<Option<Farmer>, DbErr> {
        let Some(farmer) = entity::prelude::Farmer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::farmer::ActiveModel = farmer.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.region = ActiveValue::Set(params.region);
        active_model.acreage = ActiveValue::Set(params.acreage);
        active_model.regenerative = ActiveValue::Set(params.regenerative);
        active_model.active = ActiveValue::Set(params.active);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Farmer::from_entity(entity)))
    }

    pub async fn set_payout_account(
        &self,
        id: i32,
        params: PayoutAccountParams,
    ) -> Result<Option<Farmer>, DbErr> {
        let Some(farmer) = entity::prelude::Farmer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::farmer::ActiveModel = farmer.into();
        active_model.payout_account_id = ActiveValue::Set(params.account_id);
        active_model.payout_account_active = ActiveValue::Set(params.active);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Farmer::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Farmer>, DbErr> {
        let entity = entity::prelude::Farmer::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Farmer::from_entity))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Farmer>, DbErr> {
        let entity = entity::prelude::Farmer::find()
            .filter(entity::farmer::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Farmer::from_entity))
    }

    /// Gets paginated farmers ordered by name, optionally filtered by active flag.
    ///
    /// # Returns
    /// - `Ok((farmers, total))` - Farmers for the requested page and total matching count
    pub async fn get_paginated(
        &self,
        active: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Farmer>, u64), DbErr> {
        let mut query = entity::prelude::Farmer::find();
        if let Some(active) = active {
            query = query.filter(entity::farmer::Column::Active.eq(active));
        }

        let paginator = query
            .order_by_asc(entity::farmer::Column::Name)
            .order_by_asc(entity::farmer::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let farmers = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Farmer::from_entity)
            .collect();

        Ok((farmers, total))
    }

    pub async fn get_active(&self) -> Result<Vec<Farmer>, DbErr> {
        let entities = entity::prelude::Farmer::find()
            .filter(entity::farmer::Column::Active.eq(true))
            .order_by_asc(entity::farmer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Farmer::from_entity).collect())
    }

    /// Replaces the farmer's whole supply list in one transaction.
    pub async fn replace_ingredients(
        &self,
        farmer_id: i32,
        items: Vec<SupplyItemParams>,
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::FarmerIngredient::delete_many()
            .filter(entity::farmer_ingredient::Column::FarmerId.eq(farmer_id))
            .exec(&txn)
            .await?;

        if !items.is_empty() {
            let models = items
                .into_iter()
                .map(|item| entity::farmer_ingredient::ActiveModel {
                    farmer_id: ActiveValue::Set(farmer_id),
                    ingredient_id: ActiveValue::Set(item.ingredient_id),
                    price_cents: ActiveValue::Set(item.price_cents),
                    available: ActiveValue::Set(item.available),
                });

            entity::prelude::FarmerIngredient::insert_many(models)
                .exec(&txn)
                .await?;
        }

        txn.commit().await
    }

    /// Gets the farmer's supply list joined with ingredient names, ordered by name.
    pub async fn get_ingredients(&self, farmer_id: i32) -> Result<Vec<FarmerIngredient>, DbErr> {
        let rows = entity::prelude::FarmerIngredient::find()
            .filter(entity::farmer_ingredient::Column::FarmerId.eq(farmer_id))
            .find_also_related(entity::prelude::Ingredient)
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, ingredient)| {
                ingredient.map(|ingredient| FarmerIngredient::from_entity(item, ingredient))
            })
            .collect())
    }

    /// Gets `(farmer_id, ingredient_id)` pairs for available supply of the given ingredients.
    pub async fn get_available_supply(
        &self,
        ingredient_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::FarmerIngredient::find()
            .filter(entity::farmer_ingredient::Column::IngredientId.is_in(ingredient_ids.to_vec()))
            .filter(entity::farmer_ingredient::Column::Available.eq(true))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.farmer_id, row.ingredient_id))
            .collect())
    }

    /// Gets active farmers with available supply of an ingredient, ordered by name.
    pub async fn get_suppliers(&self, ingredient_id: i32) -> Result<Vec<Farmer>, DbErr> {
        let rows = entity::prelude::FarmerIngredient::find()
            .filter(entity::farmer_ingredient::Column::IngredientId.eq(ingredient_id))
            .filter(entity::farmer_ingredient::Column::Available.eq(true))
            .find_also_related(entity::prelude::Farmer)
            .filter(entity::farmer::Column::Active.eq(true))
            .order_by_asc(entity::farmer::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, farmer)| farmer.map(Farmer::from_entity))
            .collect())
    }
}

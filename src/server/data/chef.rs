//! Chef data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    chef::{Chef, ChefParams},
    farmer::PayoutAccountParams,
};

pub struct ChefRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChefRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ChefParams) -> Result<Chef, DbErr> {
        let entity = entity::chef::ActiveModel {
            user_id: ActiveValue::Set(None),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            tier: ActiveValue::Set(params.tier),
            specialties: ActiveValue::Set(params.specialties),
            payout_account_id: ActiveValue::Set(None),
            payout_account_active: ActiveValue::Set(false),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chef::from_entity(entity))
    }

    /// Updates the profile fields of a chef.
    ///
    /// # Returns
    /// - `Ok(Some(Chef))` - Updated chef
    /// - `Ok(None)` - No chef with the given ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: ChefParams) -> Result<Option<Chef>, DbErr> {
        let Some(chef) = entity::prelude::Chef::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::chef::ActiveModel = chef.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.tier = ActiveValue::Set(params.tier);
        active_model.specialties = ActiveValue::Set(params.specialties);
        active_model.active = ActiveValue::Set(params.active);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Chef::from_entity(entity)))
    }

    pub async fn set_payout_account(
        &self,
        id: i32,
        params: PayoutAccountParams,
    ) -> Result<Option<Chef>, DbErr> {
        let Some(chef) = entity::prelude::Chef::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::chef::ActiveModel = chef.into();
        active_model.payout_account_id = ActiveValue::Set(params.account_id);
        active_model.payout_account_active = ActiveValue::Set(params.active);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Chef::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chef>, DbErr> {
        let entity = entity::prelude::Chef::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Chef::from_entity))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Chef>, DbErr> {
        let entity = entity::prelude::Chef::find()
            .filter(entity::chef::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Chef::from_entity))
    }

    /// Gets paginated chefs ordered by name, optionally filtered by active flag.
    ///
    /// # Returns
    /// - `Ok((chefs, total))` - Chefs for the requested page and total matching count
    pub async fn get_paginated(
        &self,
        active: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Chef>, u64), DbErr> {
        let mut query = entity::prelude::Chef::find();
        if let Some(active) = active {
            query = query.filter(entity::chef::Column::Active.eq(active));
        }

        let paginator = query
            .order_by_asc(entity::chef::Column::Name)
            .order_by_asc(entity::chef::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let chefs = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Chef::from_entity)
            .collect();

        Ok((chefs, total))
    }

    pub async fn get_active(&self) -> Result<Vec<Chef>, DbErr> {
        let entities = entity::prelude::Chef::find()
            .filter(entity::chef::Column::Active.eq(true))
            .order_by_asc(entity::chef::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Chef::from_entity).collect())
    }
}

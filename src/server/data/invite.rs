//! Invite data repository.
//!
//! Besides plain CRUD, `accept` performs the whole account creation for an invite in one
//! transaction: the user row, the linked chef or farmer profile, and the invite update.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ChefTier, InviteStatus, UserRole};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, TransactionTrait,
};

use crate::server::model::{
    invite::{CreateInviteParams, Invite, InviteFilter},
    user::{CreateUserParams, User},
};

pub struct InviteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending invite that has not been sent yet.
    pub async fn create(
        &self,
        params: CreateInviteParams,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Invite, DbErr> {
        let entity = entity::invite::ActiveModel {
            email: ActiveValue::Set(params.email),
            role: ActiveValue::Set(params.role),
            token: ActiveValue::Set(token),
            status: ActiveValue::Set(InviteStatus::Pending),
            phone: ActiveValue::Set(params.phone),
            invited_by: ActiveValue::Set(params.invited_by),
            expires_at: ActiveValue::Set(expires_at),
            last_sent_at: ActiveValue::Set(None),
            send_count: ActiveValue::Set(0),
            accepted_user_id: ActiveValue::Set(None),
            accepted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Invite::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invite>, DbErr> {
        let entity = entity::prelude::Invite::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Invite::from_entity))
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<Invite>, DbErr> {
        let entity = entity::prelude::Invite::find()
            .filter(entity::invite::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(Invite::from_entity))
    }

    /// Finds the newest pending, unexpired invite for an email and role.
    pub async fn find_usable(
        &self,
        email: &str,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<Option<Invite>, DbErr> {
        let entity = entity::prelude::Invite::find()
            .filter(entity::invite::Column::Email.eq(email))
            .filter(entity::invite::Column::Role.eq(role))
            .filter(entity::invite::Column::Status.eq(InviteStatus::Pending))
            .filter(entity::invite::Column::ExpiresAt.gt(now))
            .order_by_desc(entity::invite::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(Invite::from_entity))
    }

    /// Records a send: increments `send_count` and sets `last_sent_at`.
    pub async fn mark_sent(&self, invite: Invite, sent_at: DateTime<Utc>) -> Result<Invite, DbErr> {
        let mut active_model = active_model_for(self.db, invite.id).await?;
        active_model.send_count = ActiveValue::Set(invite.send_count + 1);
        active_model.last_sent_at = ActiveValue::Set(Some(sent_at));

        Ok(Invite::from_entity(active_model.update(self.db).await?))
    }

    /// Replaces the token and pushes out the expiry of an expired invite.
    pub async fn rotate_token(
        &self,
        id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Invite, DbErr> {
        let mut active_model = active_model_for(self.db, id).await?;
        active_model.token = ActiveValue::Set(token);
        active_model.expires_at = ActiveValue::Set(expires_at);

        Ok(Invite::from_entity(active_model.update(self.db).await?))
    }

    pub async fn set_status(&self, id: i32, status: InviteStatus) -> Result<Invite, DbErr> {
        let mut active_model = active_model_for(self.db, id).await?;
        active_model.status = ActiveValue::Set(status);

        Ok(Invite::from_entity(active_model.update(self.db).await?))
    }

    /// Creates the invited account and marks the invite accepted, atomically.
    ///
    /// For chef and farmer invites, an existing unlinked profile with the same email is
    /// linked to the new user; otherwise a new profile is created (chefs start at the
    /// emerging tier, farmers with no region or acreage).
    ///
    /// # Returns
    /// - `Ok((User, Invite))` - Created user and the accepted invite
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn accept(
        &self,
        invite_id: i32,
        params: CreateUserParams,
    ) -> Result<(User, Invite), DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email.clone()),
            name: ActiveValue::Set(params.name.clone()),
            phone: ActiveValue::Set(params.phone.clone()),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        match params.role {
            UserRole::Chef => {
                let existing = entity::prelude::Chef::find()
                    .filter(entity::chef::Column::Email.eq(&params.email))
                    .filter(entity::chef::Column::UserId.is_null())
                    .one(&txn)
                    .await?;

                match existing {
                    Some(chef) => {
                        let mut active_model: entity::chef::ActiveModel = chef.into();
                        active_model.user_id = ActiveValue::Set(Some(user.id));
                        active_model.update(&txn).await?;
                    }
                    None => {
                        entity::chef::ActiveModel {
                            user_id: ActiveValue::Set(Some(user.id)),
                            name: ActiveValue::Set(params.name),
                            email: ActiveValue::Set(params.email),
                            phone: ActiveValue::Set(params.phone),
                            tier: ActiveValue::Set(ChefTier::Emerging),
                            specialties: ActiveValue::Set(None),
                            payout_account_id: ActiveValue::Set(None),
                            payout_account_active: ActiveValue::Set(false),
                            active: ActiveValue::Set(true),
                            created_at: ActiveValue::Set(now),
                            ..Default::default()
                        }
                        .insert(&txn)
                        .await?;
                    }
                }
            }
            UserRole::Farmer => {
                let existing = entity::prelude::Farmer::find()
                    .filter(entity::farmer::Column::Email.eq(&params.email))
                    .filter(entity::farmer::Column::UserId.is_null())
                    .one(&txn)
                    .await?;

                match existing {
                    Some(farmer) => {
                        let mut active_model: entity::farmer::ActiveModel = farmer.into();
                        active_model.user_id = ActiveValue::Set(Some(user.id));
                        active_model.update(&txn).await?;
                    }
                    None => {
                        entity::farmer::ActiveModel {
                            user_id: ActiveValue::Set(Some(user.id)),
                            name: ActiveValue::Set(params.name),
                            email: ActiveValue::Set(params.email),
                            phone: ActiveValue::Set(params.phone),
                            region: ActiveValue::Set(String::new()),
                            acreage: ActiveValue::Set(0.0),
                            regenerative: ActiveValue::Set(false),
                            payout_account_id: ActiveValue::Set(None),
                            payout_account_active: ActiveValue::Set(false),
                            active: ActiveValue::Set(true),
                            created_at: ActiveValue::Set(now),
                            ..Default::default()
                        }
                        .insert(&txn)
                        .await?;
                    }
                }
            }
            UserRole::Admin | UserRole::Partner => {}
        }

        let invite = entity::prelude::Invite::find_by_id(invite_id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Invite with id {} not found",
                invite_id
            )))?;
        let mut active_model: entity::invite::ActiveModel = invite.into();
        active_model.status = ActiveValue::Set(InviteStatus::Accepted);
        active_model.accepted_user_id = ActiveValue::Set(Some(user.id));
        active_model.accepted_at = ActiveValue::Set(Some(now));
        let invite = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok((User::from_entity(user), Invite::from_entity(invite)))
    }

    /// Gets paginated invites, newest first.
    ///
    /// # Returns
    /// - `Ok((invites, total))` - Invites for the requested page and total matching count
    pub async fn get_paginated(
        &self,
        filter: Option<InviteFilter>,
        now: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Invite>, u64), DbErr> {
        let paginator = apply_filter(entity::prelude::Invite::find(), filter, now)
            .order_by_desc(entity::invite::Column::CreatedAt)
            .order_by_desc(entity::invite::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let invites = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Invite::from_entity)
            .collect();

        Ok((invites, total))
    }
}

fn apply_filter(
    query: Select<entity::prelude::Invite>,
    filter: Option<InviteFilter>,
    now: DateTime<Utc>,
) -> Select<entity::prelude::Invite> {
    use entity::invite::Column;

    match filter {
        None => query,
        Some(InviteFilter::Pending) => query
            .filter(Column::Status.eq(InviteStatus::Pending))
            .filter(Column::ExpiresAt.gt(now)),
        Some(InviteFilter::Expired) => query
            .filter(Column::Status.eq(InviteStatus::Pending))
            .filter(Column::ExpiresAt.lte(now)),
        Some(InviteFilter::Accepted) => query.filter(Column::Status.eq(InviteStatus::Accepted)),
        Some(InviteFilter::Revoked) => query.filter(Column::Status.eq(InviteStatus::Revoked)),
    }
}

async fn active_model_for(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::invite::ActiveModel, DbErr> {
    let invite = entity::prelude::Invite::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "Invite with id {} not found",
            id
        )))?;

    Ok(invite.into())
}

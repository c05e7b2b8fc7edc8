//! Invite lifecycle: create, send, resend, revoke, and accept.
//!
//! Accounts only come into existence by accepting an invite. Sends are idempotent in
//! two ways: creating an invite that already exists returns the existing one without
//! sending, and resending inside the cooldown window sends nothing.

use chrono::Utc;
use entity::sea_orm_active_enums::{InviteStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{invite::InviteRepository, user::UserRepository},
    error::AppError,
    model::{
        invite::{invite_ttl, CreateInviteParams, Invite, InviteFilter, InviteResult},
        page::Page,
        user::{role_label, CreateUserParams, User},
    },
    provider::notify::{send_email_best_effort, send_sms_best_effort, Notifier},
    util::{
        token::generate_token,
        validate::{non_blank, normalize_email},
    },
};

pub struct InviteService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    app_url: &'a str,
}

impl<'a> InviteService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier, app_url: &'a str) -> Self {
        Self {
            db,
            notifier,
            app_url,
        }
    }

    /// Creates and sends an invite, or returns the live one for the same email and role.
    ///
    /// # Returns
    /// - `Ok(InviteResult { created: true, .. })` - New invite inserted and delivered
    /// - `Ok(InviteResult { created: false, sent: false, .. })` - Existing invite returned
    /// - `Err(AppError::Conflict)` - A user with this email already exists
    pub async fn create(&self, params: CreateInviteParams) -> Result<InviteResult, AppError> {
        let now = Utc::now();

        if UserRepository::new(self.db)
            .find_by_email(&params.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A user with this email already exists".to_string(),
            ));
        }

        let repo = InviteRepository::new(self.db);

        if let Some(invite) = repo.find_usable(&params.email, params.role, now).await? {
            return Ok(InviteResult {
                invite,
                created: false,
                sent: false,
            });
        }

        let invite = repo
            .create(params, generate_token(), now + invite_ttl())
            .await?;
        tracing::info!("Created {} invite {}", role_label(invite.role), invite.id);

        let (invite, sent) = self.deliver(invite).await?;

        Ok(InviteResult {
            invite,
            created: true,
            sent,
        })
    }

    /// Sends an invite again.
    ///
    /// Expired invites get a fresh token and expiry. Live invites sent within the
    /// cooldown are returned without sending.
    ///
    /// # Returns
    /// - `Ok(InviteResult)` - `sent` tells whether a message went out
    /// - `Err(AppError::NotFound)` - Unknown invite
    /// - `Err(AppError::Conflict)` - Invite was accepted or revoked
    pub async fn resend(&self, id: i32) -> Result<InviteResult, AppError> {
        let now = Utc::now();
        let repo = InviteRepository::new(self.db);

        let invite = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invite not found".to_string()))?;

        match invite.status {
            InviteStatus::Accepted => {
                return Err(AppError::Conflict("Invite was already accepted".to_string()))
            }
            InviteStatus::Revoked => {
                return Err(AppError::Conflict("Invite was revoked".to_string()))
            }
            InviteStatus::Pending => {}
        }

        let invite = if invite.is_expired(now) {
            repo.rotate_token(invite.id, generate_token(), now + invite_ttl())
                .await?
        } else if invite.recently_sent(now) {
            return Ok(InviteResult {
                invite,
                created: false,
                sent: false,
            });
        } else {
            invite
        };

        let (invite, sent) = self.deliver(invite).await?;

        Ok(InviteResult {
            invite,
            created: false,
            sent,
        })
    }

    /// Revokes a pending invite. Revoking a revoked invite is a no-op.
    ///
    /// # Returns
    /// - `Ok(Invite)` - The revoked invite
    /// - `Err(AppError::NotFound)` - Unknown invite
    /// - `Err(AppError::Conflict)` - Invite was already accepted
    pub async fn revoke(&self, id: i32) -> Result<Invite, AppError> {
        let repo = InviteRepository::new(self.db);

        let invite = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invite not found".to_string()))?;

        match invite.status {
            InviteStatus::Accepted => Err(AppError::Conflict(
                "Invite was already accepted".to_string(),
            )),
            InviteStatus::Revoked => Ok(invite),
            InviteStatus::Pending => Ok(repo.set_status(invite.id, InviteStatus::Revoked).await?),
        }
    }

    /// Looks up an invite by token for the acceptance page.
    ///
    /// # Returns
    /// - `Ok(Invite)` - Invite can be accepted
    /// - `Err(AppError::NotFound)` - Unknown token
    /// - `Err(AppError::Conflict)` - Invite is accepted, revoked, or expired
    pub async fn get_by_token(&self, token: &str) -> Result<Invite, AppError> {
        let invite = InviteRepository::new(self.db)
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::NotFound("Invite not found".to_string()))?;

        if !invite.is_usable(Utc::now()) {
            return Err(AppError::Conflict(
                "Invite is no longer valid".to_string(),
            ));
        }

        Ok(invite)
    }

    /// Accepts an invite, creating the user and, for chefs and farmers, their profile.
    ///
    /// # Arguments
    /// - `token` - Invite token from the link
    /// - `name` - Display name for the new user
    /// - `phone` - Optional phone; falls back to the phone on the invite
    ///
    /// # Returns
    /// - `Ok(User)` - Created user; caller logs them in
    /// - `Err(AppError::NotFound)` - Unknown token
    /// - `Err(AppError::Conflict)` - Invite not usable or email already registered
    pub async fn accept(
        &self,
        token: &str,
        name: String,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        let invite = self.get_by_token(token).await?;

        if UserRepository::new(self.db)
            .find_by_email(&invite.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A user with this email already exists".to_string(),
            ));
        }

        let params = CreateUserParams {
            email: invite.email.clone(),
            name: name.trim().to_string(),
            phone: non_blank(phone).or(invite.phone.clone()),
            role: invite.role,
        };

        let (user, _) = InviteRepository::new(self.db)
            .accept(invite.id, params)
            .await?;
        tracing::info!(
            "Invite {} accepted by new {} user {}",
            invite.id,
            role_label(user.role),
            user.id
        );

        Ok(user)
    }

    /// Gets invites, newest first.
    pub async fn list(
        &self,
        filter: Option<InviteFilter>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Invite>, AppError> {
        let (invites, total) = InviteRepository::new(self.db)
            .get_paginated(filter, Utc::now(), page, per_page)
            .await?;

        Ok(Page::new(invites, total, page, per_page))
    }

    /// Ensures a first admin can sign up.
    ///
    /// When no admin exists yet, creates or reuses a pending admin invite for `email`.
    /// The link is returned for the caller to log rather than sent.
    ///
    /// # Returns
    /// - `Ok(Some(link))` - Invite link the admin should open
    /// - `Ok(None)` - An admin already exists, or the email belongs to a non-admin user
    pub async fn bootstrap_admin(&self, email: &str) -> Result<Option<String>, AppError> {
        let email = normalize_email(email);
        let users = UserRepository::new(self.db);

        if users.admin_exists().await? {
            return Ok(None);
        }

        if users.find_by_email(&email).await?.is_some() {
            tracing::warn!(
                "ADMIN_EMAIL belongs to an existing non-admin user; no admin invite created"
            );
            return Ok(None);
        }

        let now = Utc::now();
        let repo = InviteRepository::new(self.db);

        let invite = match repo.find_usable(&email, UserRole::Admin, now).await? {
            Some(invite) => invite,
            None => {
                repo.create(
                    CreateInviteParams {
                        email,
                        role: UserRole::Admin,
                        phone: None,
                        invited_by: None,
                    },
                    generate_token(),
                    now + invite_ttl(),
                )
                .await?
            }
        };

        Ok(Some(invite.link(self.app_url)))
    }

    /// Emails the invite link, and texts it when a phone is on file.
    ///
    /// The invite is marked sent when at least one channel succeeded.
    async fn deliver(&self, invite: Invite) -> Result<(Invite, bool), AppError> {
        let link = invite.link(self.app_url);
        let role = role_label(invite.role);
        let expires = invite.expires_at.format("%B %-d, %Y");

        let body = format!(
            "You have been invited to join Bornfidis Provisions as a {}.\n\n\
             Accept your invite: {}\n\nThis link expires on {}.",
            role, link, expires
        );
        let mut sent = send_email_best_effort(
            self.notifier,
            &invite.email,
            "You're invited to Bornfidis Provisions",
            &body,
        )
        .await;

        if let Some(phone) = invite.phone.as_deref() {
            let sms = format!("Bornfidis Provisions: you're invited as a {}. {}", role, link);
            sent |= send_sms_best_effort(self.notifier, phone, &sms).await;
        }

        if !sent {
            return Ok((invite, false));
        }

        let invite = InviteRepository::new(self.db)
            .mark_sent(invite, Utc::now())
            .await?;

        Ok((invite, true))
    }
}

//! Invite factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{InviteStatus, UserRole};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invites.
pub struct InviteFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    role: UserRole,
    token: String,
    status: InviteStatus,
    expires_at: DateTime<Utc>,
    last_sent_at: Option<DateTime<Utc>>,
    send_count: i32,
}

impl<'a> InviteFactory<'a> {
    /// Pending farmer invite expiring in 7 days, sent once an hour ago.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            email: format!("invitee{}@example.com", id),
            role: UserRole::Farmer,
            token: format!("token{:027}", id),
            status: InviteStatus::Pending,
            expires_at: now + Duration::days(7),
            last_sent_at: Some(now - Duration::hours(1)),
            send_count: 1,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn status(mut self, status: InviteStatus) -> Self {
        self.status = status;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn last_sent_at(mut self, last_sent_at: Option<DateTime<Utc>>) -> Self {
        self.last_sent_at = last_sent_at;
        self
    }

    /// Builds and inserts the invite entity into the database.
    pub async fn build(self) -> Result<entity::invite::Model, DbErr> {
        entity::invite::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            token: ActiveValue::Set(self.token),
            status: ActiveValue::Set(self.status),
            phone: ActiveValue::Set(None),
            invited_by: ActiveValue::Set(None),
            expires_at: ActiveValue::Set(self.expires_at),
            last_sent_at: ActiveValue::Set(self.last_sent_at),
            send_count: ActiveValue::Set(self.send_count),
            accepted_user_id: ActiveValue::Set(None),
            accepted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending farmer invite with default values.
pub async fn create_invite(db: &DatabaseConnection) -> Result<entity::invite::Model, DbErr> {
    InviteFactory::new(db).build().await
}

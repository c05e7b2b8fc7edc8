use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{InviteStatus, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    #[sea_orm(unique)]
    pub token: String,
    pub status: InviteStatus,
    pub phone: Option<String>,
    pub invited_by: Option<i32>,
    pub expires_at: DateTimeUtc,
    pub last_sent_at: Option<DateTimeUtc>,
    pub send_count: i32,
    pub accepted_user_id: Option<i32>,
    pub accepted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InvitedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Inviter,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AcceptedUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    AcceptedUser,
}

impl ActiveModelBehavior for ActiveModel {}

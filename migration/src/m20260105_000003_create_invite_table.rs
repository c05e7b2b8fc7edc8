use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invite::Table)
                    .if_not_exists()
                    .col(pk_auto(Invite::Id))
                    .col(string(Invite::Email))
                    .col(string_len(Invite::Role, 16))
                    .col(string_uniq(Invite::Token))
                    .col(string_len(Invite::Status, 16))
                    .col(string_null(Invite::Phone))
                    .col(integer_null(Invite::InvitedBy))
                    .col(timestamp_with_time_zone(Invite::ExpiresAt))
                    .col(timestamp_with_time_zone_null(Invite::LastSentAt))
                    .col(integer(Invite::SendCount).default(0))
                    .col(integer_null(Invite::AcceptedUserId))
                    .col(timestamp_with_time_zone_null(Invite::AcceptedAt))
                    .col(
                        timestamp_with_time_zone(Invite::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invite_invited_by")
                            .from(Invite::Table, Invite::InvitedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invite_accepted_user_id")
                            .from(Invite::Table, Invite::AcceptedUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invite_email_role")
                    .table(Invite::Table)
                    .col(Invite::Email)
                    .col(Invite::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invite {
    Table,
    Id,
    Email,
    Role,
    Token,
    Status,
    Phone,
    InvitedBy,
    ExpiresAt,
    LastSentAt,
    SendCount,
    AcceptedUserId,
    AcceptedAt,
    CreatedAt,
}

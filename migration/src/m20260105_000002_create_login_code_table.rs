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
                    .table(LoginCode::Table)
                    .if_not_exists()
                    .col(pk_auto(LoginCode::Id))
                    .col(integer(LoginCode::UserId))
                    .col(string(LoginCode::CodeHash))
                    .col(timestamp_with_time_zone(LoginCode::ExpiresAt))
                    .col(integer(LoginCode::Attempts).default(0))
                    .col(timestamp_with_time_zone_null(LoginCode::ConsumedAt))
                    .col(
                        timestamp_with_time_zone(LoginCode::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_login_code_user_id")
                            .from(LoginCode::Table, LoginCode::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoginCode {
    Table,
    Id,
    UserId,
    CodeHash,
    ExpiresAt,
    Attempts,
    ConsumedAt,
    CreatedAt,
}

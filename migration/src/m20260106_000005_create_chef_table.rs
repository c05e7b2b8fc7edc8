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
                    .table(Chef::Table)
                    .if_not_exists()
                    .col(pk_auto(Chef::Id))
                    .col(integer_null(Chef::UserId).unique_key())
                    .col(string(Chef::Name))
                    .col(string(Chef::Email))
                    .col(string_null(Chef::Phone))
                    .col(string_len(Chef::Tier, 16))
                    .col(string_null(Chef::Specialties))
                    .col(string_null(Chef::PayoutAccountId))
                    .col(boolean(Chef::PayoutAccountActive).default(false))
                    .col(boolean(Chef::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Chef::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chef_user_id")
                            .from(Chef::Table, Chef::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chef::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chef {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    Tier,
    Specialties,
    PayoutAccountId,
    PayoutAccountActive,
    Active,
    CreatedAt,
}

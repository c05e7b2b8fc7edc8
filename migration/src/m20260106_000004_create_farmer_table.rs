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
                    .table(Farmer::Table)
                    .if_not_exists()
                    .col(pk_auto(Farmer::Id))
                    .col(integer_null(Farmer::UserId).unique_key())
                    .col(string(Farmer::Name))
                    .col(string(Farmer::Email))
                    .col(string_null(Farmer::Phone))
                    .col(string(Farmer::Region))
                    .col(double(Farmer::Acreage).default(0.0))
                    .col(boolean(Farmer::Regenerative).default(false))
                    .col(string_null(Farmer::PayoutAccountId))
                    .col(boolean(Farmer::PayoutAccountActive).default(false))
                    .col(boolean(Farmer::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Farmer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmer_user_id")
                            .from(Farmer::Table, Farmer::UserId)
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
            .drop_table(Table::drop().table(Farmer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Farmer {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    Region,
    Acreage,
    Regenerative,
    PayoutAccountId,
    PayoutAccountActive,
    Active,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_farmer_table::Farmer, m20260106_000005_create_chef_table::Chef,
    m20260107_000007_create_booking_tables::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignment::Id))
                    .col(integer(Assignment::BookingId))
                    .col(string_len(Assignment::Kind, 16))
                    .col(integer_null(Assignment::ChefId))
                    .col(integer_null(Assignment::FarmerId))
                    .col(string_len(Assignment::Status, 16))
                    .col(big_integer(Assignment::PayoutAmountCents).default(0))
                    .col(string_len(Assignment::PayoutStatus, 16))
                    .col(string_null(Assignment::Notes))
                    .col(
                        timestamp_with_time_zone(Assignment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Assignment::RespondedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_booking_id")
                            .from(Assignment::Table, Assignment::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_chef_id")
                            .from(Assignment::Table, Assignment::ChefId)
                            .to(Chef::Table, Chef::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_farmer_id")
                            .from(Assignment::Table, Assignment::FarmerId)
                            .to(Farmer::Table, Farmer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    Id,
    BookingId,
    Kind,
    ChefId,
    FarmerId,
    Status,
    PayoutAmountCents,
    PayoutStatus,
    Notes,
    CreatedAt,
    RespondedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000007_create_booking_tables::Booking,
    m20260107_000008_create_assignment_table::Assignment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payout::Table)
                    .if_not_exists()
                    .col(pk_auto(Payout::Id))
                    .col(integer_uniq(Payout::AssignmentId))
                    .col(integer(Payout::BookingId))
                    .col(string_len(Payout::Kind, 16))
                    .col(string(Payout::Destination))
                    .col(big_integer(Payout::AmountCents))
                    .col(string_len(Payout::Currency, 8))
                    .col(string_len(Payout::Status, 16))
                    .col(string_null(Payout::TransferId))
                    .col(text_null(Payout::FailureReason))
                    .col(integer(Payout::Attempts).default(0))
                    .col(
                        timestamp_with_time_zone(Payout::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Payout::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payout_assignment_id")
                            .from(Payout::Table, Payout::AssignmentId)
                            .to(Assignment::Table, Assignment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payout_booking_id")
                            .from(Payout::Table, Payout::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payout {
    Table,
    Id,
    AssignmentId,
    BookingId,
    Kind,
    Destination,
    AmountCents,
    Currency,
    Status,
    TransferId,
    FailureReason,
    Attempts,
    CreatedAt,
    UpdatedAt,
}

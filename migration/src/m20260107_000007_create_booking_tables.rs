use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000006_create_ingredient_tables::Ingredient;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string(Booking::ClientName))
                    .col(string(Booking::ClientEmail))
                    .col(string_null(Booking::ClientPhone))
                    .col(date(Booking::EventDate))
                    .col(string(Booking::EventType))
                    .col(string(Booking::Location))
                    .col(integer(Booking::GuestCount))
                    .col(big_integer_null(Booking::BudgetCents))
                    .col(text_null(Booking::DietaryNotes))
                    .col(string_len(Booking::Status, 16))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingIngredient::Table)
                    .if_not_exists()
                    .col(integer(BookingIngredient::BookingId))
                    .col(integer(BookingIngredient::IngredientId))
                    .col(double(BookingIngredient::Quantity).default(0.0))
                    .primary_key(
                        Index::create()
                            .col(BookingIngredient::BookingId)
                            .col(BookingIngredient::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_ingredient_booking_id")
                            .from(BookingIngredient::Table, BookingIngredient::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_ingredient_ingredient_id")
                            .from(BookingIngredient::Table, BookingIngredient::IngredientId)
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingIngredient::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    ClientName,
    ClientEmail,
    ClientPhone,
    EventDate,
    EventType,
    Location,
    GuestCount,
    BudgetCents,
    DietaryNotes,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum BookingIngredient {
    Table,
    BookingId,
    IngredientId,
    Quantity,
}

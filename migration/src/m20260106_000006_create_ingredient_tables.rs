use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_farmer_table::Farmer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(string_uniq(Ingredient::Name))
                    .col(string(Ingredient::Category))
                    .col(string(Ingredient::Unit))
                    .col(boolean(Ingredient::Seasonal).default(false))
                    .col(
                        timestamp_with_time_zone(Ingredient::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FarmerIngredient::Table)
                    .if_not_exists()
                    .col(integer(FarmerIngredient::FarmerId))
                    .col(integer(FarmerIngredient::IngredientId))
                    .col(big_integer(FarmerIngredient::PriceCents))
                    .col(boolean(FarmerIngredient::Available).default(true))
                    .primary_key(
                        Index::create()
                            .col(FarmerIngredient::FarmerId)
                            .col(FarmerIngredient::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmer_ingredient_farmer_id")
                            .from(FarmerIngredient::Table, FarmerIngredient::FarmerId)
                            .to(Farmer::Table, Farmer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmer_ingredient_ingredient_id")
                            .from(FarmerIngredient::Table, FarmerIngredient::IngredientId)
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
            .drop_table(Table::drop().table(FarmerIngredient::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    Category,
    Unit,
    Seasonal,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum FarmerIngredient {
    Table,
    FarmerId,
    IngredientId,
    PriceCents,
    Available,
}

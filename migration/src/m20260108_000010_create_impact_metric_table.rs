use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000004_create_farmer_table::Farmer, m20260107_000007_create_booking_tables::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImpactMetric::Table)
                    .if_not_exists()
                    .col(pk_auto(ImpactMetric::Id))
                    .col(string_len(ImpactMetric::Kind, 24))
                    .col(double(ImpactMetric::Value))
                    .col(integer_null(ImpactMetric::FarmerId))
                    .col(integer_null(ImpactMetric::BookingId))
                    .col(string_null(ImpactMetric::Note))
                    .col(date(ImpactMetric::RecordedOn))
                    .col(
                        timestamp_with_time_zone(ImpactMetric::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_impact_metric_farmer_id")
                            .from(ImpactMetric::Table, ImpactMetric::FarmerId)
                            .to(Farmer::Table, Farmer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_impact_metric_booking_id")
                            .from(ImpactMetric::Table, ImpactMetric::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImpactMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ImpactMetric {
    Table,
    Id,
    Kind,
    Value,
    FarmerId,
    BookingId,
    Note,
    RecordedOn,
    CreatedAt,
}

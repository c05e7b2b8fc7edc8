use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartnerInquiry::Table)
                    .if_not_exists()
                    .col(pk_auto(PartnerInquiry::Id))
                    .col(string(PartnerInquiry::Organization))
                    .col(string(PartnerInquiry::ContactName))
                    .col(string(PartnerInquiry::Email))
                    .col(string_null(PartnerInquiry::Phone))
                    .col(string_len(PartnerInquiry::PartnerType, 16))
                    .col(text(PartnerInquiry::Message))
                    .col(string_len(PartnerInquiry::Status, 16))
                    .col(
                        timestamp_with_time_zone(PartnerInquiry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PartnerInquiry::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartnerInquiry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartnerInquiry {
    Table,
    Id,
    Organization,
    ContactName,
    Email,
    Phone,
    PartnerType,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}

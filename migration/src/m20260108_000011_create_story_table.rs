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
                    .table(Story::Table)
                    .if_not_exists()
                    .col(pk_auto(Story::Id))
                    .col(string(Story::Title))
                    .col(string_uniq(Story::Slug))
                    .col(string_null(Story::Excerpt))
                    .col(text(Story::Body))
                    .col(integer_null(Story::AuthorId))
                    .col(boolean(Story::Published).default(false))
                    .col(boolean(Story::Featured).default(false))
                    .col(timestamp_with_time_zone_null(Story::PublishedAt))
                    .col(
                        timestamp_with_time_zone(Story::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Story::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_author_id")
                            .from(Story::Table, Story::AuthorId)
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
            .drop_table(Table::drop().table(Story::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Story {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Body,
    AuthorId,
    Published,
    Featured,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

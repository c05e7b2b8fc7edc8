//! Story data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::story::{Story, StoryParams};

pub struct StoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a story under an already-unique slug.
    ///
    /// `published_at` is set to now when the story is created published.
    pub async fn create(
        &self,
        params: StoryParams,
        slug: String,
        author_id: Option<i32>,
    ) -> Result<Story, DbErr> {
        let now = Utc::now();

        let entity = entity::story::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(slug),
            excerpt: ActiveValue::Set(params.excerpt),
            body: ActiveValue::Set(params.body),
            author_id: ActiveValue::Set(author_id),
            published: ActiveValue::Set(params.published),
            featured: ActiveValue::Set(params.featured),
            published_at: ActiveValue::Set(params.published.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Story::from_entity(entity))
    }

    /// Updates a story's content and flags. The slug never changes.
    ///
    /// `published_at` is only set the first time the story is published; unpublishing
    /// and republishing keeps the original date.
    ///
    /// # Returns
    /// - `Ok(Some(Story))` - Updated story
    /// - `Ok(None)` - No story with the given ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: StoryParams) -> Result<Option<Story>, DbErr> {
        let Some(story) = entity::prelude::Story::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let first_publish = params.published && story.published_at.is_none();

        let mut active_model: entity::story::ActiveModel = story.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.excerpt = ActiveValue::Set(params.excerpt);
        active_model.body = ActiveValue::Set(params.body);
        active_model.published = ActiveValue::Set(params.published);
        active_model.featured = ActiveValue::Set(params.featured);
        if first_publish {
            active_model.published_at = ActiveValue::Set(Some(now));
        }
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Story::from_entity(entity)))
    }

    /// Deletes a story.
    ///
    /// # Returns
    /// - `Ok(true)` - Story was deleted
    /// - `Ok(false)` - No story with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Story::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Story>, DbErr> {
        let entity = entity::prelude::Story::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Story::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Story>, DbErr> {
        let entity = entity::prelude::Story::find()
            .filter(entity::story::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Story::from_entity))
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Story::find()
            .filter(entity::story::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all stories, newest first.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Story>, u64), DbErr> {
        let paginator = entity::prelude::Story::find()
            .order_by_desc(entity::story::Column::CreatedAt)
            .order_by_desc(entity::story::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let stories = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Story::from_entity)
            .collect();

        Ok((stories, total))
    }

    /// Gets published stories with featured ones first, then by publish date, newest first.
    pub async fn get_published_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Story>, u64), DbErr> {
        let paginator = entity::prelude::Story::find()
            .filter(entity::story::Column::Published.eq(true))
            .order_by_desc(entity::story::Column::Featured)
            .order_by_desc(entity::story::Column::PublishedAt)
            .order_by_desc(entity::story::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let stories = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Story::from_entity)
            .collect();

        Ok((stories, total))
    }
}

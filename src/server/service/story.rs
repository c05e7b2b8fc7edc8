//! Editorial stories shown on the public site.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::story::StoryRepository,
    error::AppError,
    model::{
        page::Page,
        story::{Story, StoryParams},
    },
    util::slug::{slugify, with_suffix},
};

pub struct StoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a story with a slug derived from its title.
    ///
    /// A slug already taken gets `-2`, `-3`, and so on appended until it is free.
    pub async fn create(&self, params: StoryParams, author_id: Option<i32>) -> Result<Story, AppError> {
        let repo = StoryRepository::new(self.db);

        let base = slugify(&params.title);
        let mut n = 1;
        let slug = loop {
            let candidate = with_suffix(&base, n);
            if !repo.slug_exists(&candidate).await? {
                break candidate;
            }
            n += 1;
        };

        let story = repo.create(params, slug, author_id).await?;
        tracing::info!("Created story {} ({})", story.id, story.slug);

        Ok(story)
    }

    /// Updates a story's content. The slug never changes.
    pub async fn update(&self, id: i32, params: StoryParams) -> Result<Story, AppError> {
        StoryRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StoryRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<Story, AppError> {
        StoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list(&self, page: u64, per_page: u64) -> Result<Page<Story>, AppError> {
        let (stories, total) = StoryRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Page::new(stories, total, page, per_page))
    }

    /// Lists published stories, featured first and then newest.
    pub async fn list_published(&self, page: u64, per_page: u64) -> Result<Page<Story>, AppError> {
        let (stories, total) = StoryRepository::new(self.db)
            .get_published_paginated(page, per_page)
            .await?;

        Ok(Page::new(stories, total, page, per_page))
    }

    /// Gets a published story by slug; drafts are reported as missing.
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<Story, AppError> {
        StoryRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .filter(|story| story.published)
            .ok_or_else(not_found)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Story not found".to_string())
}

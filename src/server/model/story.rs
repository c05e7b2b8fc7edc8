use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Event, Options, Parser};

use crate::{
    model::story::{PublicStoryDto, StoryDto, StoryInputDto, StorySummaryDto},
    server::{
        error::validation::ValidationError,
        util::validate::{non_blank, Validate, Validator},
    },
};

/// Renders Markdown to HTML.
///
/// Raw HTML in the source is escaped rather than passed through.
pub fn render_markdown(body: &str) -> String {
    let parser = Parser::new_ext(body, Options::all()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Markdown source.
    pub body: String,
    pub author_id: Option<i32>,
    pub published: bool,
    pub featured: bool,
    /// Set the first time the story is published and never cleared.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    pub fn from_entity(entity: entity::story::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            excerpt: entity.excerpt,
            body: entity.body,
            author_id: entity.author_id,
            published: entity.published,
            featured: entity.featured,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> StoryDto {
        StoryDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            body: self.body,
            author_id: self.author_id,
            published: self.published,
            featured: self.featured,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> StorySummaryDto {
        StorySummaryDto {
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            featured: self.featured,
            published_at: self.published_at,
        }
    }

    pub fn into_public_dto(self) -> PublicStoryDto {
        PublicStoryDto {
            body_html: render_markdown(&self.body),
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            featured: self.featured,
            published_at: self.published_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoryParams {
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub published: bool,
    pub featured: bool,
}

impl StoryParams {
    pub fn from_dto(dto: StoryInputDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            excerpt: non_blank(dto.excerpt),
            body: dto.body,
            published: dto.published,
            featured: dto.featured,
        }
    }
}

impl Validate for StoryInputDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .required("title", &self.title, 200)
            .check(
                "excerpt",
                self.excerpt
                    .as_deref()
                    .is_none_or(|e| e.chars().count() <= 500),
                "must be at most 500 characters",
            )
            .required("body", &self.body, 100_000)
            .finish()
    }
}

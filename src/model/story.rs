use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub author_id: Option<i32>,
    pub published: bool,
    pub featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StorySummaryDto {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Published story with its Markdown body rendered to HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicStoryDto {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body_html: String,
    pub featured: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoryInputDto {
    pub title: String,
    pub excerpt: Option<String>,
    /// Markdown source.
    pub body: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

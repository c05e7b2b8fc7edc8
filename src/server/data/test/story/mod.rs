use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::story::StoryRepository, model::story::StoryParams};

mod get_published_paginated;
mod update;

fn params(title: &str, published: bool) -> StoryParams {
    StoryParams {
        title: title.to_string(),
        excerpt: None,
        body: "From farm to table.".to_string(),
        published,
        featured: false,
    }
}

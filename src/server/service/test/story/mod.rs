use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, model::story::StoryParams, service::story::StoryService};

mod create;
mod get;
mod get_published_by_slug;

fn params(title: &str, published: bool) -> StoryParams {
    StoryParams {
        title: title.to_string(),
        excerpt: None,
        body: "From *soil* to supper.".to_string(),
        published,
        featured: false,
    }
}

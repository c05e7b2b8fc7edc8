//! Story factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a story with a unique slug.
///
/// # Arguments
/// - `db` - Database connection
/// - `published` - Whether the story is published (sets `published_at` to now)
pub async fn create_story(
    db: &DatabaseConnection,
    published: bool,
) -> Result<entity::story::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::story::ActiveModel {
        id: ActiveValue::NotSet,
        title: ActiveValue::Set(format!("Story {}", id)),
        slug: ActiveValue::Set(format!("story-{}", id)),
        excerpt: ActiveValue::Set(None),
        body: ActiveValue::Set("Harvest **season** is here.".to_string()),
        author_id: ActiveValue::Set(None),
        published: ActiveValue::Set(published),
        featured: ActiveValue::Set(false),
        published_at: ActiveValue::Set(published.then_some(now)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

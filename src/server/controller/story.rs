use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        story::{PublicStoryDto, StoryDto, StoryInputDto, StorySummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::story::{Story, StoryParams},
        service::story::StoryService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping story endpoints in OpenAPI documentation
pub static STORY_TAG: &str = "story";

/// Write a new story.
///
/// The slug is derived from the title and suffixed with `-2`, `-3`, ... when taken.
#[utoipa::path(
    post,
    path = "/api/admin/stories",
    tag = STORY_TAG,
    request_body = StoryInputDto,
    responses(
        (status = 201, description = "Story created", body = StoryDto),
        (status = 400, description = "Invalid story", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_story(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<StoryInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let story = StoryService::new(&state.db)
        .create(StoryParams::from_dto(payload), Some(admin.id))
        .await?;

    Ok((StatusCode::CREATED, Json(story.into_dto())))
}

/// List all stories, drafts included.
#[utoipa::path(
    get,
    path = "/api/admin/stories",
    tag = STORY_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated stories", body = PageDto<StoryDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_stories(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stories = StoryService::new(&state.db)
        .list(page.page, page.entries)
        .await?;

    Ok((StatusCode::OK, Json(stories.into_dto(Story::into_dto))))
}

/// Read any story, published or draft, for editing.
#[utoipa::path(
    get,
    path = "/api/admin/stories/{id}",
    tag = STORY_TAG,
    params(("id" = i32, Path, description = "Story ID")),
    responses(
        (status = 200, description = "Story", body = StoryDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let story = StoryService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(story.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/stories/{id}",
    tag = STORY_TAG,
    params(("id" = i32, Path, description = "Story ID")),
    request_body = StoryInputDto,
    responses(
        (status = 200, description = "Story updated", body = StoryDto),
        (status = 400, description = "Invalid story", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<StoryInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let story = StoryService::new(&state.db)
        .update(id, StoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(story.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/stories/{id}",
    tag = STORY_TAG,
    params(("id" = i32, Path, description = "Story ID")),
    responses(
        (status = 204, description = "Story deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    StoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List published stories for the public site.
#[utoipa::path(
    get,
    path = "/api/stories",
    tag = STORY_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Published stories", body = PageDto<StorySummaryDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_published_stories(
    State(state): State<AppState>,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stories = StoryService::new(&state.db)
        .list_published(page.page, page.entries)
        .await?;

    Ok((StatusCode::OK, Json(stories.into_dto(Story::into_summary_dto))))
}

/// Read a published story with its body rendered to HTML.
#[utoipa::path(
    get,
    path = "/api/stories/{slug}",
    tag = STORY_TAG,
    params(("slug" = String, Path, description = "Story slug")),
    responses(
        (status = 200, description = "Story", body = PublicStoryDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_story(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let story = StoryService::new(&state.db)
        .get_published_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(story.into_public_dto())))
}

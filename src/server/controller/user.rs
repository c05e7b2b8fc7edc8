use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::user::UserService,
        state::AppState,
        util::extract::ValidatedQuery,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all user accounts.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Paginated users ordered by name
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated users", body = PageDto<UserDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .list(page.page, page.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(User::into_dto))))
}

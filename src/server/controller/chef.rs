use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        chef::{ChefDto, ChefInputDto, PublicChefDto},
        farmer::{ActiveFilterQuery, PayoutAccountDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            chef::{Chef, ChefParams},
            farmer::PayoutAccountParams,
        },
        service::chef::ChefService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping chef endpoints in OpenAPI documentation
pub static CHEF_TAG: &str = "chef";

/// Create a chef profile.
///
/// # Access Control
/// - `Admin` - Only admins can create chefs
#[utoipa::path(
    post,
    path = "/api/admin/chefs",
    tag = CHEF_TAG,
    request_body = ChefInputDto,
    responses(
        (status = 201, description = "Chef created", body = ChefDto),
        (status = 400, description = "Invalid chef data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chef(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<ChefInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let chef = ChefService::new(&state.db)
        .create(ChefParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(chef.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/chefs",
    tag = CHEF_TAG,
    params(PageQuery, ActiveFilterQuery),
    responses(
        (status = 200, description = "Paginated chefs", body = PageDto<ChefDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_chefs(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
    Query(filter): Query<ActiveFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let chefs = ChefService::new(&state.db)
        .list(filter.active, page.page, page.entries)
        .await?;

    Ok((StatusCode::OK, Json(chefs.into_dto(Chef::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/chefs/{id}",
    tag = CHEF_TAG,
    params(("id" = i32, Path, description = "Chef ID")),
    responses(
        (status = 200, description = "Chef", body = ChefDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Chef not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chef(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let chef = ChefService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(chef.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/chefs/{id}",
    tag = CHEF_TAG,
    params(("id" = i32, Path, description = "Chef ID")),
    request_body = ChefInputDto,
    responses(
        (status = 200, description = "Chef updated", body = ChefDto),
        (status = 400, description = "Invalid chef data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Chef not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_chef(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ChefInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let chef = ChefService::new(&state.db)
        .update(id, ChefParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(chef.into_dto())))
}

/// Set the account a chef's payouts are sent to.
#[utoipa::path(
    put,
    path = "/api/admin/chefs/{id}/payout-account",
    tag = CHEF_TAG,
    params(("id" = i32, Path, description = "Chef ID")),
    request_body = PayoutAccountDto,
    responses(
        (status = 200, description = "Payout account updated", body = ChefDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Chef not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_chef_payout_account(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PayoutAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let chef = ChefService::new(&state.db)
        .set_payout_account(id, PayoutAccountParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(chef.into_dto())))
}

/// Get the signed-in chef's own profile.
#[utoipa::path(
    get,
    path = "/api/chef/me",
    tag = CHEF_TAG,
    responses(
        (status = 200, description = "Own chef profile", body = ChefDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a chef", body = ErrorDto),
        (status = 404, description = "No chef profile for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_chef_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Chef])
        .await?;

    let chef = ChefService::new(&state.db).get_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(chef.into_dto())))
}

/// Public directory of active chefs.
#[utoipa::path(
    get,
    path = "/api/chefs",
    tag = CHEF_TAG,
    responses(
        (status = 200, description = "Active chefs", body = Vec<PublicChefDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn chef_directory(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let chefs = ChefService::new(&state.db).get_directory().await?;

    Ok((
        StatusCode::OK,
        Json(chefs.into_iter().map(Chef::into_public_dto).collect::<Vec<_>>()),
    ))
}

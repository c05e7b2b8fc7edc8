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
        farmer::{
            ActiveFilterQuery, FarmerDto, FarmerIngredientDto, FarmerInputDto, PayoutAccountDto,
            PublicFarmerDto, SetFarmerIngredientsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::farmer::{
            Farmer, FarmerIngredient, FarmerParams, PayoutAccountParams, SupplyItemParams,
        },
        service::farmer::FarmerService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping farmer endpoints in OpenAPI documentation
pub static FARMER_TAG: &str = "farmer";

/// Create a farmer profile.
///
/// # Access Control
/// - `Admin` - Only admins can create farmers
///
/// # Returns
/// - `201 Created` - Farmer created
/// - `400 Bad Request` - Invalid farmer data
#[utoipa::path(
    post,
    path = "/api/admin/farmers",
    tag = FARMER_TAG,
    request_body = FarmerInputDto,
    responses(
        (status = 201, description = "Farmer created", body = FarmerDto),
        (status = 400, description = "Invalid farmer data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_farmer(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<FarmerInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let farmer = FarmerService::new(&state.db)
        .create(FarmerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(farmer.into_dto())))
}

/// List farmers, optionally filtered by active flag.
#[utoipa::path(
    get,
    path = "/api/admin/farmers",
    tag = FARMER_TAG,
    params(PageQuery, ActiveFilterQuery),
    responses(
        (status = 200, description = "Paginated farmers", body = PageDto<FarmerDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_farmers(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
    Query(filter): Query<ActiveFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let farmers = FarmerService::new(&state.db)
        .list(filter.active, page.page, page.entries)
        .await?;

    Ok((StatusCode::OK, Json(farmers.into_dto(Farmer::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/farmers/{id}",
    tag = FARMER_TAG,
    params(("id" = i32, Path, description = "Farmer ID")),
    responses(
        (status = 200, description = "Farmer", body = FarmerDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Farmer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_farmer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let farmer = FarmerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(farmer.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/farmers/{id}",
    tag = FARMER_TAG,
    params(("id" = i32, Path, description = "Farmer ID")),
    request_body = FarmerInputDto,
    responses(
        (status = 200, description = "Farmer updated", body = FarmerDto),
        (status = 400, description = "Invalid farmer data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Farmer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_farmer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<FarmerInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let farmer = FarmerService::new(&state.db)
        .update(id, FarmerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(farmer.into_dto())))
}

/// Set the account a farmer's payouts are sent to.
#[utoipa::path(
    put,
    path = "/api/admin/farmers/{id}/payout-account",
    tag = FARMER_TAG,
    params(("id" = i32, Path, description = "Farmer ID")),
    request_body = PayoutAccountDto,
    responses(
        (status = 200, description = "Payout account updated", body = FarmerDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Farmer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_farmer_payout_account(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PayoutAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let farmer = FarmerService::new(&state.db)
        .set_payout_account(id, PayoutAccountParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(farmer.into_dto())))
}

/// Get the signed-in farmer's own profile.
#[utoipa::path(
    get,
    path = "/api/farmer/me",
    tag = FARMER_TAG,
    responses(
        (status = 200, description = "Own farmer profile", body = FarmerDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a farmer", body = ErrorDto),
        (status = 404, description = "No farmer profile for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_farmer_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Farmer])
        .await?;

    let farmer = FarmerService::new(&state.db).get_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(farmer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/farmer/me/ingredients",
    tag = FARMER_TAG,
    responses(
        (status = 200, description = "Own supply list", body = Vec<FarmerIngredientDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a farmer", body = ErrorDto),
        (status = 404, description = "No farmer profile for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_ingredients(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Farmer])
        .await?;

    let service = FarmerService::new(&state.db);
    let farmer = service.get_for_user(user.id).await?;
    let ingredients = service.get_ingredients(farmer.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            ingredients
                .into_iter()
                .map(FarmerIngredient::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Replace the signed-in farmer's supply list.
///
/// # Returns
/// - `200 OK` - The new supply list
/// - `400 Bad Request` - Invalid item or unknown ingredient ID
#[utoipa::path(
    put,
    path = "/api/farmer/me/ingredients",
    tag = FARMER_TAG,
    request_body = SetFarmerIngredientsDto,
    responses(
        (status = 200, description = "Supply list replaced", body = Vec<FarmerIngredientDto>),
        (status = 400, description = "Invalid item or unknown ingredient", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a farmer", body = ErrorDto),
        (status = 404, description = "No farmer profile for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_my_ingredients(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<SetFarmerIngredientsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Farmer])
        .await?;

    let service = FarmerService::new(&state.db);
    let farmer = service.get_for_user(user.id).await?;
    let ingredients = service
        .set_ingredients(farmer.id, SupplyItemParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ingredients
                .into_iter()
                .map(FarmerIngredient::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Public directory of active farmers.
#[utoipa::path(
    get,
    path = "/api/farmers",
    tag = FARMER_TAG,
    responses(
        (status = 200, description = "Active farmers", body = Vec<PublicFarmerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn farmer_directory(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let farmers = FarmerService::new(&state.db).get_directory().await?;

    Ok((
        StatusCode::OK,
        Json(
            farmers
                .into_iter()
                .map(Farmer::into_public_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

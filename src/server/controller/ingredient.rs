use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        farmer::PublicFarmerDto,
        ingredient::{IngredientDto, IngredientInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            farmer::Farmer,
            ingredient::{Ingredient, IngredientParams},
        },
        service::ingredient::IngredientService,
        state::AppState,
        util::extract::ValidatedJson,
    },
};

/// Tag for grouping ingredient endpoints in OpenAPI documentation
pub static INGREDIENT_TAG: &str = "ingredient";

/// Add an ingredient to the catalog.
///
/// # Returns
/// - `201 Created` - Ingredient created
/// - `409 Conflict` - Name already used, ignoring case
#[utoipa::path(
    post,
    path = "/api/admin/ingredients",
    tag = INGREDIENT_TAG,
    request_body = IngredientInputDto,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientDto),
        (status = 400, description = "Invalid ingredient data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Ingredient name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<IngredientInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ingredient = IngredientService::new(&state.db)
        .create(IngredientParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ingredient.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    request_body = IngredientInputDto,
    responses(
        (status = 200, description = "Ingredient updated", body = IngredientDto),
        (status = 400, description = "Invalid ingredient data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 409, description = "Ingredient name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ingredient(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<IngredientInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ingredient = IngredientService::new(&state.db)
        .update(id, IngredientParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ingredient.into_dto())))
}

/// List the ingredient catalog by name.
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    responses(
        (status = 200, description = "All ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ingredients = IngredientService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(
            ingredients
                .into_iter()
                .map(Ingredient::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List active farmers currently offering an ingredient.
#[utoipa::path(
    get,
    path = "/api/ingredients/{id}/suppliers",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Farmers offering the ingredient", body = Vec<PublicFarmerDto>),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suppliers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let farmers = IngredientService::new(&state.db).get_suppliers(id).await?;

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

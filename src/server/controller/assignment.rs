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
        assignment::{
            AssignmentDto, CreateAssignmentDto, RespondAssignmentDto, UpdateAssignmentStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::assignment::{Assignment, CreateAssignmentParams},
        service::assignment::AssignmentService,
        state::AppState,
        util::extract::ValidatedJson,
    },
};

/// Tag for grouping assignment endpoints in OpenAPI documentation
pub static ASSIGNMENT_TAG: &str = "assignment";

/// Offer a booking to a specific chef or farmer.
///
/// The provider is texted the offer when they have a phone number on file.
///
/// # Returns
/// - `201 Created` - Assignment offered
/// - `404 Not Found` - Unknown booking or provider
/// - `409 Conflict` - Booking closed, provider inactive, or provider already assigned
#[utoipa::path(
    post,
    path = "/api/admin/bookings/{id}/assignments",
    tag = ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = CreateAssignmentDto,
    responses(
        (status = 201, description = "Assignment offered", body = AssignmentDto),
        (status = 400, description = "Invalid assignment data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking or provider not found", body = ErrorDto),
        (status = 409, description = "Assignment not possible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let assignment = AssignmentService::new(&state.db, state.notifier.as_ref())
        .assign(CreateAssignmentParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/assignments/{id}/status",
    tag = ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Assignment ID")),
    request_body = UpdateAssignmentStatusDto,
    responses(
        (status = 200, description = "Assignment updated", body = AssignmentDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_assignment_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAssignmentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let assignment = AssignmentService::new(&state.db, state.notifier.as_ref())
        .update_status(id, payload.status.into())
        .await?;

    Ok((StatusCode::OK, Json(assignment.into_dto())))
}

/// List the signed-in chef's or farmer's assignments.
#[utoipa::path(
    get,
    path = "/api/me/assignments",
    tag = ASSIGNMENT_TAG,
    responses(
        (status = 200, description = "Own assignments", body = Vec<AssignmentDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a chef or farmer", body = ErrorDto),
        (status = 404, description = "No provider profile for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_assignments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Chef, Permission::Farmer])
        .await?;

    let service = AssignmentService::new(&state.db, state.notifier.as_ref());
    let provider = service.provider_for(&user).await?;
    let assignments = service.list_for_provider(provider).await?;

    Ok((
        StatusCode::OK,
        Json(
            assignments
                .into_iter()
                .map(Assignment::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Accept or decline an offered assignment.
///
/// # Returns
/// - `200 OK` - Assignment accepted or declined
/// - `404 Not Found` - Unknown assignment, or not offered to this provider
/// - `409 Conflict` - Offer already answered or withdrawn
#[utoipa::path(
    post,
    path = "/api/me/assignments/{id}/respond",
    tag = ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Assignment ID")),
    request_body = RespondAssignmentDto,
    responses(
        (status = 200, description = "Response recorded", body = AssignmentDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a chef or farmer", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 409, description = "Assignment no longer awaiting a response", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_to_assignment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<RespondAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Chef, Permission::Farmer])
        .await?;

    let service = AssignmentService::new(&state.db, state.notifier.as_ref());
    let provider = service.provider_for(&user).await?;
    let assignment = service.respond(provider, id, payload.accept).await?;

    Ok((StatusCode::OK, Json(assignment.into_dto())))
}

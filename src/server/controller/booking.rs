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
        assignment::AssignmentDto,
        booking::{
            AutoAssignDto, BookingDetailDto, BookingDto, BookingFilterQuery, BookingMatchesDto,
            CreateBookingDto, UpdateBookingStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::{Booking, CreateBookingParams},
        service::{
            assignment::AssignmentService, booking::BookingService, matching::MatchingService,
        },
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Submit a booking request.
///
/// Public endpoint used by the booking form. The client receives an SMS confirmation
/// when a phone number is given and the admin is emailed; neither failing affects the
/// response.
///
/// # Returns
/// - `201 Created` - Booking recorded as pending
/// - `400 Bad Request` - Invalid booking data or unknown ingredient
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(
        &state.db,
        state.notifier.as_ref(),
        state.admin_email.as_deref(),
    )
    .create(CreateBookingParams::from_dto(payload))
    .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// List bookings, newest event first.
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = BOOKING_TAG,
    params(PageQuery, BookingFilterQuery),
    responses(
        (status = 200, description = "Paginated bookings", body = PageDto<BookingDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
    Query(filter): Query<BookingFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bookings = BookingService::new(
        &state.db,
        state.notifier.as_ref(),
        state.admin_email.as_deref(),
    )
    .list(filter.status.map(Into::into), page.page, page.entries)
    .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto(Booking::into_dto))))
}

/// Get a booking with its requested ingredients and assignments.
#[utoipa::path(
    get,
    path = "/api/admin/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking detail", body = BookingDetailDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detail = BookingService::new(
        &state.db,
        state.notifier.as_ref(),
        state.admin_email.as_deref(),
    )
    .get_detail(id)
    .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Move a booking to a new status.
///
/// # Returns
/// - `200 OK` - Updated booking
/// - `404 Not Found` - Unknown booking
/// - `409 Conflict` - Status change not allowed from the current status
#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Booking updated", body = BookingDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let booking = BookingService::new(
        &state.db,
        state.notifier.as_ref(),
        state.admin_email.as_deref(),
    )
    .update_status(id, payload.status.into())
    .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Rank the chefs and farmers suited to a booking.
#[utoipa::path(
    get,
    path = "/api/admin/bookings/{id}/matches",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Ranked candidates", body = BookingMatchesDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_matches(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let matches = MatchingService::new(&state.db).find_matches(id).await?;

    Ok((StatusCode::OK, Json(matches.into_dto())))
}

/// Offer a booking to the best-ranked eligible chef.
#[utoipa::path(
    post,
    path = "/api/admin/bookings/{id}/auto-assign",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = AutoAssignDto,
    responses(
        (status = 201, description = "Chef offered the booking", body = AssignmentDto),
        (status = 400, description = "Invalid payout amount", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "No eligible chef or booking closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn auto_assign_chef(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<AutoAssignDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let assignment = AssignmentService::new(&state.db, state.notifier.as_ref())
        .auto_assign_chef(id, payload.payout_amount_cents)
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

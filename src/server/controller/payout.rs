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
        payout::{PayoutDto, PayoutFilterQuery, PayoutOutcomeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payout::{AssignmentPayoutOutcome, Payout},
        service::{assignment::AssignmentService, payout::PayoutService},
        state::AppState,
        util::extract::ValidatedQuery,
    },
};

/// Tag for grouping payout endpoints in OpenAPI documentation
pub static PAYOUT_TAG: &str = "payout";

/// Pay the provider behind an assignment.
///
/// Safe to call repeatedly: an assignment that is already paid is reported as
/// `already_paid` without contacting the payment provider. Blocked and failed payouts
/// are reported in the body with `200 OK`.
#[utoipa::path(
    post,
    path = "/api/admin/assignments/{id}/payout",
    tag = PAYOUT_TAG,
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Payout outcome", body = PayoutOutcomeDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Assignment, booking, or provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn process_assignment_payout(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let outcome = PayoutService::new(
        &state.db,
        state.payments.as_ref(),
        &state.payout_currency,
    )
    .process_assignment(id)
    .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Pay every assignment on a booking.
#[utoipa::path(
    post,
    path = "/api/admin/bookings/{id}/payouts",
    tag = PAYOUT_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Outcome per assignment", body = Vec<PayoutOutcomeDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn process_booking_payouts(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let outcomes = PayoutService::new(
        &state.db,
        state.payments.as_ref(),
        &state.payout_currency,
    )
    .process_booking(id)
    .await?;

    Ok((
        StatusCode::OK,
        Json(
            outcomes
                .into_iter()
                .map(AssignmentPayoutOutcome::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/payouts",
    tag = PAYOUT_TAG,
    params(PageQuery, PayoutFilterQuery),
    responses(
        (status = 200, description = "Paginated payouts", body = PageDto<PayoutDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payouts(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
    Query(filter): Query<PayoutFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payouts = PayoutService::new(
        &state.db,
        state.payments.as_ref(),
        &state.payout_currency,
    )
    .list(filter.status.map(Into::into), page.page, page.entries)
    .await?;

    Ok((StatusCode::OK, Json(payouts.into_dto(Payout::into_dto))))
}

/// List payouts made to the signed-in chef or farmer.
#[utoipa::path(
    get,
    path = "/api/me/payouts",
    tag = PAYOUT_TAG,
    responses(
        (status = 200, description = "Own payouts", body = Vec<PayoutDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a chef or farmer", body = ErrorDto),
        (status = 404, description = "No provider profile for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_payouts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Chef, Permission::Farmer])
        .await?;

    let provider = AssignmentService::new(&state.db, state.notifier.as_ref())
        .provider_for(&user)
        .await?;
    let payouts = PayoutService::new(
        &state.db,
        state.payments.as_ref(),
        &state.payout_currency,
    )
    .list_for_provider(provider)
    .await?;

    Ok((
        StatusCode::OK,
        Json(payouts.into_iter().map(Payout::into_dto).collect::<Vec<_>>()),
    ))
}

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
        partner::{
            CreatePartnerInquiryDto, InquiryFilterQuery, PartnerInquiryDto, UpdateInquiryStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::partner::{CreatePartnerInquiryParams, PartnerInquiry},
        service::partner::PartnerService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping partner inquiry endpoints in OpenAPI documentation
pub static PARTNER_TAG: &str = "partner";

/// Submit a partnership inquiry from the public site.
#[utoipa::path(
    post,
    path = "/api/partners/inquiries",
    tag = PARTNER_TAG,
    request_body = CreatePartnerInquiryDto,
    responses(
        (status = 201, description = "Inquiry received", body = PartnerInquiryDto),
        (status = 400, description = "Invalid inquiry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_inquiry(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePartnerInquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    let inquiry = PartnerService::new(
        &state.db,
        state.notifier.as_ref(),
        state.admin_email.as_deref(),
    )
    .submit(CreatePartnerInquiryParams::from_dto(payload))
    .await?;

    Ok((StatusCode::CREATED, Json(inquiry.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/partners/inquiries",
    tag = PARTNER_TAG,
    params(PageQuery, InquiryFilterQuery),
    responses(
        (status = 200, description = "Paginated inquiries", body = PageDto<PartnerInquiryDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_inquiries(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
    Query(filter): Query<InquiryFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let inquiries = PartnerService::new(
        &state.db,
        state.notifier.as_ref(),
        state.admin_email.as_deref(),
    )
    .list(filter.status.map(Into::into), page.page, page.entries)
    .await?;

    Ok((
        StatusCode::OK,
        Json(inquiries.into_dto(PartnerInquiry::into_dto)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/partners/inquiries/{id}/status",
    tag = PARTNER_TAG,
    params(("id" = i32, Path, description = "Inquiry ID")),
    request_body = UpdateInquiryStatusDto,
    responses(
        (status = 200, description = "Inquiry updated", body = PartnerInquiryDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Partner inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateInquiryStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let inquiry = PartnerService::new(
        &state.db,
        state.notifier.as_ref(),
        state.admin_email.as_deref(),
    )
    .update_status(id, payload.status.into())
    .await?;

    Ok((StatusCode::OK, Json(inquiry.into_dto())))
}

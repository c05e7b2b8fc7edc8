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
        invite::{
            AcceptInviteDto, CreateInviteDto, InviteDto, InviteFilterQuery, InviteResultDto,
            PublicInviteDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::invite::{CreateInviteParams, Invite},
        service::invite::InviteService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping invite endpoints in OpenAPI documentation
pub static INVITE_TAG: &str = "invite";

/// Invite someone to create an account.
///
/// Sends the invite link by email, and by SMS when a phone is given. Inviting an
/// address that already has a live invite for the same role returns that invite
/// without sending anything.
///
/// # Access Control
/// - `Admin` - Only admins can invite
///
/// # Returns
/// - `201 Created` - New invite created
/// - `200 OK` - Existing live invite returned
/// - `409 Conflict` - A user with this email already exists
#[utoipa::path(
    post,
    path = "/api/admin/invites",
    tag = INVITE_TAG,
    request_body = CreateInviteDto,
    responses(
        (status = 201, description = "Invite created", body = InviteResultDto),
        (status = 200, description = "Existing live invite returned", body = InviteResultDto),
        (status = 400, description = "Invalid invite data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "A user with this email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invite(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateInviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = InviteService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .create(CreateInviteParams::from_dto(payload, Some(admin.id)))
        .await?;

    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(result.into_dto())))
}

/// List invites, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/invites",
    tag = INVITE_TAG,
    params(PageQuery, InviteFilterQuery),
    responses(
        (status = 200, description = "Paginated invites", body = PageDto<InviteDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_invites(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
    Query(filter): Query<InviteFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let invites = InviteService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .list(filter.status.map(Into::into), page.page, page.entries)
        .await?;

    Ok((StatusCode::OK, Json(invites.into_dto(Invite::into_dto))))
}

/// Send an invite again.
///
/// Expired invites get a new link. Calling again within a minute of the last send
/// returns the invite with `sent = false` and sends nothing.
///
/// # Returns
/// - `200 OK` - Invite, with `sent` telling whether a message went out
/// - `404 Not Found` - Unknown invite
/// - `409 Conflict` - Invite was accepted or revoked
#[utoipa::path(
    post,
    path = "/api/admin/invites/{id}/resend",
    tag = INVITE_TAG,
    params(("id" = i32, Path, description = "Invite ID")),
    responses(
        (status = 200, description = "Invite resent or cooling down", body = InviteResultDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Invite not found", body = ErrorDto),
        (status = 409, description = "Invite was accepted or revoked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_invite(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = InviteService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .resend(id)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Revoke a pending invite.
#[utoipa::path(
    post,
    path = "/api/admin/invites/{id}/revoke",
    tag = INVITE_TAG,
    params(("id" = i32, Path, description = "Invite ID")),
    responses(
        (status = 200, description = "Invite revoked", body = InviteDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Invite not found", body = ErrorDto),
        (status = 409, description = "Invite was already accepted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_invite(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let invite = InviteService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .revoke(id)
        .await?;

    Ok((StatusCode::OK, Json(invite.into_dto())))
}

/// Look up an invite by its link token.
#[utoipa::path(
    get,
    path = "/api/invites/{token}",
    tag = INVITE_TAG,
    params(("token" = String, Path, description = "Invite token from the link")),
    responses(
        (status = 200, description = "Invite details", body = PublicInviteDto),
        (status = 404, description = "Invite not found", body = ErrorDto),
        (status = 409, description = "Invite is no longer usable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invite(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invite = InviteService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .get_by_token(&token)
        .await?;

    Ok((StatusCode::OK, Json(invite.into_public_dto())))
}

/// Accept an invite and create the account.
///
/// Chef and farmer invites also create the matching profile. The new user is signed
/// in on success.
///
/// # Returns
/// - `201 Created` - Account created and signed in
/// - `404 Not Found` - Unknown token
/// - `409 Conflict` - Invite not usable or email already registered
#[utoipa::path(
    post,
    path = "/api/invites/{token}/accept",
    tag = INVITE_TAG,
    params(("token" = String, Path, description = "Invite token from the link")),
    request_body = AcceptInviteDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 404, description = "Invite not found", body = ErrorDto),
        (status = 409, description = "Invite is no longer usable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invite(
    State(state): State<AppState>,
    session: Session,
    Path(token): Path<String>,
    ValidatedJson(payload): ValidatedJson<AcceptInviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = InviteService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .accept(&token, payload.name, payload.phone)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

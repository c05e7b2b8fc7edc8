use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginRequestDto, UserDto, VerifyLoginDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
        util::extract::ValidatedJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Request a login code by email.
///
/// Sends a six-digit code to the address when it belongs to an account. The response
/// is the same either way so the endpoint cannot be used to discover accounts.
///
/// # Returns
/// - `202 Accepted` - Request handled
/// - `400 Bad Request` - Malformed email
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequestDto,
    responses(
        (status = 202, description = "Login code sent if the account exists"),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, state.notifier.as_ref())
        .request_login(&payload.email)
        .await?;

    Ok(StatusCode::ACCEPTED)
}

/// Exchange a login code for a session.
///
/// # Returns
/// - `200 OK` - Signed in; body is the current user
/// - `401 Unauthorized` - Wrong, expired, or exhausted code
#[utoipa::path(
    post,
    path = "/api/auth/verify",
    tag = AUTH_TAG,
    request_body = VerifyLoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Invalid or expired login code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<VerifyLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, state.notifier.as_ref())
        .verify_login(&payload.email, &payload.code)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;
    tracing::info!("User {} signed in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get the signed-in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Sign out and clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

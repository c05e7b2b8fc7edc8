use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// The request is not authenticated. Results in 401 Unauthorized.
    #[error("User not found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// Results in 401 Unauthorized so the client logs in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role required for the operation.
    ///
    /// Results in 403 Forbidden.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login code did not match, expired, or exhausted its attempts.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid or expired login code")]
    InvalidLoginCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Authentication required"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
/// - `InvalidLoginCode` → 401 Unauthorized with "Invalid or expired login code"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::InvalidLoginCode => (StatusCode::UNAUTHORIZED, "Invalid or expired login code"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}

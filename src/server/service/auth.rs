//! Passwordless login with emailed one-time codes.
//!
//! A login code is six digits, stored only as a SHA-256 hash, valid for ten minutes,
//! and dies after five wrong guesses. Requesting a code never reveals whether the
//! email belongs to an account.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{login_code::LoginCodeRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{User, LOGIN_CODE_TTL_MINUTES, MAX_LOGIN_ATTEMPTS},
    provider::notify::{send_email_best_effort, Notifier},
    util::{
        token::{generate_login_code, hash_code},
        validate::normalize_email,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Issues a login code and emails it, if the email belongs to a user.
    ///
    /// Unknown emails are silently ignored so callers cannot probe for accounts.
    ///
    /// # Arguments
    /// - `email` - Address the user signs in with
    ///
    /// # Returns
    /// - `Ok(())` - Request handled (whether or not a code was sent)
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn request_login(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            tracing::debug!("Login requested for unknown email");
            return Ok(());
        };

        let code = generate_login_code();
        let expires_at = Utc::now() + Duration::minutes(LOGIN_CODE_TTL_MINUTES);

        LoginCodeRepository::new(self.db)
            .create(user.id, hash_code(&code), expires_at)
            .await?;

        let body = format!(
            "Your Bornfidis Provisions login code is {}. It expires in {} minutes.",
            code, LOGIN_CODE_TTL_MINUTES
        );
        send_email_best_effort(self.notifier, &user.email, "Your login code", &body).await;

        Ok(())
    }

    /// Checks a login code and consumes it on success.
    ///
    /// Only the newest live code is considered. A wrong code counts against it; once
    /// the attempt limit is reached the code is rejected even if correct.
    ///
    /// # Returns
    /// - `Ok(User)` - Code matched; caller stores the user in the session
    /// - `Err(AuthError::InvalidLoginCode)` - Unknown email, no live code, too many
    ///   attempts, or wrong code
    pub async fn verify_login(&self, email: &str, code: &str) -> Result<User, AppError> {
        let email = normalize_email(email);
        let now = Utc::now();

        let user = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidLoginCode)?;

        let codes = LoginCodeRepository::new(self.db);
        let login_code = codes
            .find_active(user.id, now)
            .await?
            .ok_or(AuthError::InvalidLoginCode)?;

        if login_code.attempts >= MAX_LOGIN_ATTEMPTS {
            return Err(AuthError::InvalidLoginCode.into());
        }

        if login_code.code_hash != hash_code(code) {
            let attempts = codes.record_failed_attempt(login_code).await?;
            tracing::info!(
                "Wrong login code for user {} (attempt {} of {})",
                user.id,
                attempts,
                MAX_LOGIN_ATTEMPTS
            );
            return Err(AuthError::InvalidLoginCode.into());
        }

        codes.consume(login_code).await?;

        Ok(user)
    }
}

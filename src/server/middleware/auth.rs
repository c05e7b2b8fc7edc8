use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Role a request handler may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Chef,
    Farmer,
    Partner,
}

impl Permission {
    fn granted_to(self, role: UserRole) -> bool {
        matches!(
            (self, role),
            (_, UserRole::Admin)
                | (Permission::Chef, UserRole::Chef)
                | (Permission::Farmer, UserRole::Farmer)
                | (Permission::Partner, UserRole::Partner)
        )
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks their role.
    ///
    /// The user passes when their role matches any of the listed permissions. Admins
    /// pass every check. An empty list only requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with a permitted role
    /// - `Err(AuthError::UserNotInSession)` - No user ID in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user was deleted
    /// - `Err(AuthError::AccessDenied)` - Role not permitted
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !permissions.is_empty() && !permissions.iter().any(|p| p.granted_to(user.role)) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("role {:?} lacks any of {:?}", user.role, permissions),
            )
            .into());
        }

        Ok(user)
    }
}

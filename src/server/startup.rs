//! Server initialization.
//!
//! Connects the database and session store, builds outbound providers from configuration,
//! and bootstraps the first admin invite.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    provider::{
        notify::{LogNotifier, Notifier, WebhookNotifier},
        payment::{DisabledPaymentGateway, HttpPaymentGateway, PaymentGateway},
    },
    service::invite::InviteService,
};

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database and expire after 7 days of
/// inactivity. Cookies are marked secure when the application is served over HTTPS.
///
/// # Arguments
/// - `db` - Connected database whose pool hosts the session table
/// - `config` - Application configuration used to decide cookie security
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for outbound provider calls.
///
/// Redirects are disabled so provider URLs cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(15))
        .build()?;

    Ok(client)
}

/// Selects the payment gateway from configuration.
///
/// Uses the HTTP gateway when both `PAYMENTS_API_URL` and `PAYMENTS_API_KEY` are set,
/// otherwise every payout attempt fails with "payments not configured".
pub fn setup_payment_gateway(config: &Config, client: reqwest::Client) -> Arc<dyn PaymentGateway> {
    match (&config.payments_api_url, &config.payments_api_key) {
        (Some(url), Some(key)) => {
            tracing::info!("Payments enabled via {}", url);
            Arc::new(HttpPaymentGateway::new(client, url, key.clone()))
        }
        _ => {
            tracing::warn!("PAYMENTS_API_URL or PAYMENTS_API_KEY not set, payouts are disabled");
            Arc::new(DisabledPaymentGateway)
        }
    }
}

/// Selects the notifier from configuration.
///
/// Uses the webhook notifier when `NOTIFY_WEBHOOK_URL` is set, otherwise messages are
/// only written to the log.
pub fn setup_notifier(config: &Config, client: reqwest::Client) -> Arc<dyn Notifier> {
    match &config.notify_webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(client, url.clone())),
        None => {
            tracing::info!("NOTIFY_WEBHOOK_URL not set, notifications are logged only");
            Arc::new(LogNotifier)
        }
    }
}

/// Ensures a path to the first admin account exists.
///
/// When no admin user exists and `ADMIN_EMAIL` is configured, creates (or reuses) a
/// pending admin invite for that address and logs its link.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration with the admin email and app URL
///
/// # Returns
/// - `Ok(())` - Admin exists, invite logged, or no admin email configured
/// - `Err(AppError)` - Database error while checking or creating the invite
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin_email) = config.admin_email.as_deref() else {
        return Ok(());
    };

    let service = InviteService::new(db, &LogNotifier, &config.app_url);
    if let Some(link) = service.bootstrap_admin(admin_email).await? {
        tracing::info!("No admin user found. Accept the admin invite at: {}", link);
    }

    Ok(())
}

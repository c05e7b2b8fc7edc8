use std::sync::Arc;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::login_code::LoginCodeRepository,
    error::AppError,
    model::payout::PayoutOutcome,
    provider::payment::PaymentGateway,
    service::payout::PayoutService,
};

/// Runs every 15 minutes at second 0.
const SCHEDULE: &str = "0 */15 * * * *";

/// Login codes older than this are deleted once consumed or expired.
const LOGIN_CODE_RETENTION_HOURS: i64 = 24;

/// Starts the maintenance scheduler.
///
/// Every run:
/// - Deletes consumed or expired login codes older than a day
/// - Retries payouts for completed bookings whose assignments are not yet paid
///
/// # Arguments
/// - `db`: Database connection
/// - `payments`: Payment gateway used for payout retries
/// - `currency`: Payout currency code
pub async fn start_scheduler(
    db: DatabaseConnection,
    payments: Arc<dyn PaymentGateway>,
    currency: String,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let payments = payments.clone();
        let currency = currency.clone();

        Box::pin(async move {
            if let Err(e) = run_maintenance(&db, payments.as_ref(), &currency).await {
                tracing::error!("Error running maintenance: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(scheduler)
}

/// Runs one maintenance pass.
///
/// The two tasks are independent; a failure in one is logged and the other still runs.
pub async fn run_maintenance(
    db: &DatabaseConnection,
    payments: &dyn PaymentGateway,
    currency: &str,
) -> Result<(), AppError> {
    if let Err(e) = purge_login_codes(db).await {
        tracing::error!("Error purging login codes: {}", e);
    }

    if let Err(e) = retry_payouts(db, payments, currency).await {
        tracing::error!("Error retrying payouts: {}", e);
    }

    Ok(())
}

async fn purge_login_codes(db: &DatabaseConnection) -> Result<(), AppError> {
    let cutoff = Utc::now() - Duration::hours(LOGIN_CODE_RETENTION_HOURS);
    let deleted = LoginCodeRepository::new(db).delete_stale(cutoff).await?;

    if deleted > 0 {
        tracing::debug!("Deleted {} stale login codes", deleted);
    }

    Ok(())
}

async fn retry_payouts(
    db: &DatabaseConnection,
    payments: &dyn PaymentGateway,
    currency: &str,
) -> Result<(), AppError> {
    let outcomes = PayoutService::new(db, payments, currency)
        .retry_unpaid()
        .await?;

    if outcomes.is_empty() {
        return Ok(());
    }

    let paid = outcomes
        .iter()
        .filter(|o| matches!(o.outcome, PayoutOutcome::Paid(_)))
        .count();
    tracing::info!(
        "Payout retry processed {} assignments, {} paid",
        outcomes.len(),
        paid
    );

    Ok(())
}

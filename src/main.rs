mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, scheduler::maintenance, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let payments = startup::setup_payment_gateway(&config, http_client.clone());
    let notifier = startup::setup_notifier(&config, http_client);

    // Log an admin invite link if no admin exists yet
    startup::check_for_admin(&db, &config).await?;

    // Keep the handle alive so the scheduler runs for the lifetime of the server
    let _scheduler =
        maintenance::start_scheduler(db.clone(), payments.clone(), config.payout_currency.clone())
            .await?;

    let state = AppState::new(
        db,
        payments,
        notifier,
        config.app_url.clone(),
        config.admin_email.clone(),
        config.payout_currency.clone(),
    );
    let app = router::app(state, session);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

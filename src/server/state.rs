//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Payment gateway used for provider payouts
//! - Notifier for SMS and email delivery
//! - Application URL and admin contact for generating links and notifications

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::provider::{notify::Notifier, payment::PaymentGateway};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - Providers are reference-counted trait objects
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Payment provider used to transfer payouts to chefs and farmers.
    pub payments: Arc<dyn PaymentGateway>,

    /// SMS and email delivery.
    pub notifier: Arc<dyn Notifier>,

    /// Application base URL without trailing slash.
    ///
    /// Used to construct invite links sent by email and SMS.
    pub app_url: String,

    /// Address receiving booking and partner inquiry notifications.
    pub admin_email: Option<String>,

    /// ISO currency code for payouts (e.g. `usd`).
    pub payout_currency: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `payments` - Payment gateway for payouts
    /// - `notifier` - SMS and email provider
    /// - `app_url` - Application base URL
    /// - `admin_email` - Optional admin notification address
    /// - `payout_currency` - Currency code for transfers
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        payments: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn Notifier>,
        app_url: String,
        admin_email: Option<String>,
        payout_currency: String,
    ) -> Self {
        Self {
            db,
            payments,
            notifier,
            app_url,
            admin_email,
            payout_currency,
        }
    }
}

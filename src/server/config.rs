use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PAYOUT_CURRENCY: &str = "usd";

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_addr: SocketAddr,

    /// Email address that receives the bootstrap admin invite and booking notifications.
    pub admin_email: Option<String>,

    pub notify_webhook_url: Option<Url>,

    pub payments_api_url: Option<Url>,
    pub payments_api_key: Option<String>,
    pub payout_currency: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let database_url = require("DATABASE_URL")?;

        let app_url = require("APP_URL")?;
        parse_url("APP_URL", &app_url)?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let notify_webhook_url = get("NOTIFY_WEBHOOK_URL")
            .map(|v| parse_url("NOTIFY_WEBHOOK_URL", &v))
            .transpose()?;
        let payments_api_url = get("PAYMENTS_API_URL")
            .map(|v| parse_url("PAYMENTS_API_URL", &v))
            .transpose()?;

        Ok(Self {
            database_url,
            app_url: app_url.trim_end_matches('/').to_string(),
            bind_addr,
            admin_email: get("ADMIN_EMAIL").map(|v| v.trim().to_lowercase()),
            notify_webhook_url,
            payments_api_url,
            payments_api_key: get("PAYMENTS_API_KEY"),
            payout_currency: get("PAYOUT_CURRENCY")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_PAYOUT_CURRENCY.to_string()),
        })
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

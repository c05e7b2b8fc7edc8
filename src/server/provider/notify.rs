use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification webhook returned status {0}")]
    Rejected(u16),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Outbound SMS and email delivery.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_sms(&self, to: &str, body: &str) -> Result<(), NotifyError>;

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
enum Envelope<'a> {
    Sms {
        to: &'a str,
        body: &'a str,
    },
    Email {
        to: &'a str,
        subject: &'a str,
        body: &'a str,
    },
}

/// Delivers notifications by posting JSON envelopes to a relay webhook.
///
/// SMS envelopes look like `{"channel":"sms","to":..,"body":..}` and email envelopes
/// add a `subject`.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Url,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    async fn post(&self, envelope: &Envelope<'_>) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(envelope)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Rejected(response.status().as_u16()));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send_sms(&self, to: &str, body: &str) -> Result<(), NotifyError> {
        tracing::info!("Sending SMS to {}", to);
        self.post(&Envelope::Sms { to, body }).await
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        tracing::info!("Sending email \"{}\" to {}", subject, to);
        self.post(&Envelope::Email { to, subject, body }).await
    }
}

/// Writes notifications to the log instead of delivering them.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_sms(&self, to: &str, body: &str) -> Result<(), NotifyError> {
        tracing::info!(to, body, "SMS (not delivered, no webhook configured)");
        Ok(())
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        tracing::info!(to, subject, body, "Email (not delivered, no webhook configured)");
        Ok(())
    }
}

/// Sends an SMS that must not fail the surrounding request.
///
/// Failures are logged at warn level and swallowed.
///
/// # Returns
/// - `true` - Message handed to the provider
/// - `false` - Delivery failed
pub async fn send_sms_best_effort(notifier: &dyn Notifier, to: &str, body: &str) -> bool {
    match notifier.send_sms(to, body).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to send SMS to {}: {}", to, e);
            false
        }
    }
}

/// Sends an email that must not fail the surrounding request.
///
/// Failures are logged at warn level and swallowed.
pub async fn send_email_best_effort(
    notifier: &dyn Notifier,
    to: &str,
    subject: &str,
    body: &str,
) -> bool {
    match notifier.send_email(to, subject, body).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to send email to {}: {}", to, e);
            false
        }
    }
}

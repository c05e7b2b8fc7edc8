use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Funds transfer to a provider's payout account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRequest {
    pub amount_cents: i64,
    pub currency: String,
    /// Recipient payout account ID at the payment provider.
    pub destination: String,
    /// Sent as the `Idempotency-Key` header rather than in the body.
    #[serde(skip)]
    pub idempotency_key: String,
    pub description: String,
}

/// Transfer accepted by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transfer {
    pub id: String,
}

#[derive(Error, Debug)]
pub enum PaymentError {
    /// No payment provider credentials configured.
    #[error("payments not configured")]
    NotConfigured,

    /// Provider answered with a non-success status.
    #[error("transfer rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Request never reached the provider or the response was unreadable.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_transfer(&self, request: TransferRequest) -> Result<Transfer, PaymentError>;
}

/// Payment gateway speaking a generic JSON transfer API.
///
/// Transfers are created with `POST {base}/transfers` authenticated by a bearer key.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpPaymentGateway {
    pub fn new(client: reqwest::Client, base_url: &Url, api_key: String) -> Self {
        Self {
            client,
            endpoint: format!("{}/transfers", base_url.as_str().trim_end_matches('/')),
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    #[serde(alias = "message")]
    error: String,
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_transfer(&self, request: TransferRequest) -> Result<Transfer, PaymentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("Idempotency-Key", &request.idempotency_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);

            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Transfer>().await?)
    }
}

/// Gateway used when no payment provider is configured; every transfer fails.
pub struct DisabledPaymentGateway;

#[async_trait]
impl PaymentGateway for DisabledPaymentGateway {
    async fn create_transfer(&self, _request: TransferRequest) -> Result<Transfer, PaymentError> {
        Err(PaymentError::NotConfigured)
    }
}

//! Globitex Eurowallet REST API client.

use crate::config::ClientConfig;
use crate::error::GlobitexError;
use crate::payment::PaymentInstruction;
use crate::request::EurowalletRequest;
use crate::responses::{AccountStatusResponse, PaymentResponse};
use auth::{NonceGenerator, RequestSigner, SignatureEncoding, SigningSecrets};
use rest_client::{HttpResponse, RestClient, Transport};
use serde::de::DeserializeOwned;

/// Eurowallet client that signs every request before handing it to a
/// [`Transport`].
///
/// Each call draws a fresh nonce at signing time. Nothing is retried: a
/// caller that wants to resend must call again, which re-signs with a new
/// nonce.
pub struct EurowalletClient<T = RestClient> {
    transport: T,
    secrets: SigningSecrets,
    encoding: SignatureEncoding,
    nonces: NonceGenerator,
}

impl EurowalletClient<RestClient> {
    /// Create a client backed by `reqwest`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(secrets: SigningSecrets, config: ClientConfig) -> Result<Self, GlobitexError> {
        let transport = RestClient::new(config.environment.rest_base_url(), config.timeout)?;

        tracing::info!(
            environment = %config.environment,
            api_key = %secrets.api_key(),
            signature_encoding = %config.signature_encoding,
            "Eurowallet client created"
        );

        Ok(Self::with_transport(
            transport,
            secrets,
            config.signature_encoding,
        ))
    }

    /// Load secrets and configuration from the environment.
    ///
    /// Fails before any network activity if a secret is missing or the
    /// signature encoding is unknown.
    pub fn from_env() -> Result<Self, GlobitexError> {
        let secrets = SigningSecrets::from_env()?;
        let config = ClientConfig::from_env()?;
        Self::new(secrets, config)
    }
}

impl<T: Transport> EurowalletClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(
        transport: T,
        secrets: SigningSecrets,
        encoding: SignatureEncoding,
    ) -> Self {
        Self {
            transport,
            secrets,
            encoding,
            nonces: NonceGenerator::new(),
        }
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.secrets.api_key()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Query account balances and statuses.
    ///
    /// GET /api/1/eurowallet/status
    pub async fn account_status(&self) -> Result<AccountStatusResponse, GlobitexError> {
        let response: AccountStatusResponse =
            self.execute(EurowalletRequest::AccountStatus).await?;

        tracing::debug!(accounts = response.accounts.len(), "Account status received");

        Ok(response)
    }

    /// Sign and submit a payment.
    ///
    /// POST /api/1/eurowallet/payments
    ///
    /// The instruction is consumed: a rejected payment is not resent under
    /// the same signature.
    pub async fn submit_payment(
        &self,
        payment: PaymentInstruction,
    ) -> Result<PaymentResponse, GlobitexError> {
        tracing::info!(
            account = %payment.account(),
            beneficiary_account = %payment.beneficiary_account(),
            amount = %payment.amount(),
            request_time = payment.request_time(),
            "Submitting payment"
        );

        let response: PaymentResponse = self
            .execute(EurowalletRequest::SubmitPayment(payment))
            .await?;

        tracing::info!(
            payment_id = %response.payment_id,
            status = %response.status,
            "Payment submitted"
        );

        Ok(response)
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        request: EurowalletRequest,
    ) -> Result<R, GlobitexError> {
        let signer = RequestSigner::with_encoding(&self.secrets, self.encoding);
        let nonce = self.nonces.next();
        let http_request = request.prepare(&signer, nonce)?;
        let path = http_request.path.clone();

        let response = self.transport.send(http_request).await.map_err(|e| {
            tracing::warn!(path = %path, nonce = nonce, error = %e, "Request failed");
            GlobitexError::from(e)
        })?;

        handle_response(&path, response)
    }
}

/// Deserialize a 2xx body, or turn anything else into a rejection.
fn handle_response<R: DeserializeOwned>(
    path: &str,
    response: HttpResponse,
) -> Result<R, GlobitexError> {
    if response.is_success() {
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Failed to parse response");
            GlobitexError::Parse(e.to_string())
        })
    } else {
        let err = GlobitexError::from_rejection(response.status, response.body);
        tracing::warn!(path = %path, status = response.status, error = %err, "Request rejected");
        Err(err)
    }
}

impl<T> std::fmt::Debug for EurowalletClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EurowalletClient")
            .field("api_key", &self.secrets.api_key())
            .field("encoding", &self.encoding)
            .field("last_nonce", &self.nonces.last())
            .finish()
    }
}

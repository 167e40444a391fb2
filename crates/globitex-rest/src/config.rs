//! Client configuration.

use auth::{AuthError, SignatureEncoding};
use common::GlobitexEnvironment;
use rest_client::DEFAULT_TIMEOUT;
use std::time::Duration;

/// Non-secret settings for an [`EurowalletClient`](crate::EurowalletClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: GlobitexEnvironment,
    /// Encoding of the `X-Signature` header.
    pub signature_encoding: SignatureEncoding,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: GlobitexEnvironment::default(),
            signature_encoding: SignatureEncoding::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `GLOBITEX_BASE_URL` and
    /// `GLOBITEX_SIGNATURE_ENCODING`.
    ///
    /// # Errors
    /// Returns `AuthError::UnsupportedEncoding` for an unknown encoding; the
    /// value is never replaced by the default.
    pub fn from_env() -> Result<Self, AuthError> {
        Ok(Self {
            environment: GlobitexEnvironment::from_env(),
            signature_encoding: SignatureEncoding::from_env()?,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

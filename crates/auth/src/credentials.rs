//! Signing secret management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the signing keys
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable holding the key for request (message) signatures.
pub const MESSAGE_SECRET_VAR: &str = "MESSAGE_SECRET_KEY";
/// Environment variable holding the key for transaction signatures.
pub const TRANSACTION_SECRET_VAR: &str = "TRANSACTION_SECRET_KEY";

/// The process-wide secret set.
///
/// Loaded once at startup and never mutated afterwards, so it can be shared
/// read-only between threads. Both signing keys are wrapped in `SecretString`
/// which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct SigningSecrets {
    api_key: String,
    message_signing_key: SecretString,
    transaction_signing_key: SecretString,
}

impl SigningSecrets {
    /// Load secrets from environment variables.
    ///
    /// Looks for:
    /// - `API_KEY` - The API key (public)
    /// - `MESSAGE_SECRET_KEY` - Key for the request signature (private)
    /// - `TRANSACTION_SECRET_KEY` - Key for the transaction signature (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingSecret` naming the first variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = read_var(API_KEY_VAR)?;
        let message_signing_key = read_var(MESSAGE_SECRET_VAR)?;
        let transaction_signing_key = read_var(TRANSACTION_SECRET_VAR)?;

        let secrets = Self::new(api_key, message_signing_key, transaction_signing_key)?;
        tracing::debug!(api_key = %secrets.api_key, "Signing secrets loaded");
        Ok(secrets)
    }

    /// Create a secret set from explicit values.
    ///
    /// # Errors
    /// Returns `AuthError::MissingSecret` if any value is empty.
    pub fn new(
        api_key: String,
        message_signing_key: String,
        transaction_signing_key: String,
    ) -> Result<Self, AuthError> {
        require(API_KEY_VAR, &api_key)?;
        require(MESSAGE_SECRET_VAR, &message_signing_key)?;
        require(TRANSACTION_SECRET_VAR, &transaction_signing_key)?;

        Ok(Self {
            api_key,
            message_signing_key: SecretString::from(message_signing_key),
            transaction_signing_key: SecretString::from(transaction_signing_key),
        })
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the key used for request signatures.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    pub(crate) fn message_signing_key(&self) -> &str {
        self.message_signing_key.expose_secret()
    }

    /// Expose the key used for transaction signatures.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    pub(crate) fn transaction_signing_key(&self) -> &str {
        self.transaction_signing_key.expose_secret()
    }
}

fn read_var(name: &str) -> Result<String, AuthError> {
    std::env::var(name).map_err(|_| AuthError::MissingSecret(name.into()))
}

fn require(name: &str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::MissingSecret(name.into()));
    }
    Ok(())
}

impl std::fmt::Debug for SigningSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningSecrets")
            .field("api_key", &self.api_key)
            .field("message_signing_key", &"[REDACTED]")
            .field("transaction_signing_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets() -> SigningSecrets {
        SigningSecrets::new("my_api_key".into(), "msg_secret".into(), "tx_secret".into())
            .unwrap()
    }

    #[test]
    fn test_secrets_new() {
        let secrets = secrets();
        assert_eq!(secrets.api_key(), "my_api_key");
        assert_eq!(secrets.message_signing_key(), "msg_secret");
        assert_eq!(secrets.transaction_signing_key(), "tx_secret");
    }

    #[test]
    fn test_empty_secret_rejected() {
        let err = SigningSecrets::new("key".into(), String::new(), "tx".into()).unwrap_err();
        assert!(matches!(err, AuthError::MissingSecret(ref name) if name == MESSAGE_SECRET_VAR));
        assert!(err.is_configuration());

        let err = SigningSecrets::new(String::new(), "msg".into(), "tx".into()).unwrap_err();
        assert!(matches!(err, AuthError::MissingSecret(ref name) if name == API_KEY_VAR));

        let err = SigningSecrets::new("key".into(), "msg".into(), String::new()).unwrap_err();
        assert!(matches!(err, AuthError::MissingSecret(ref name) if name == TRANSACTION_SECRET_VAR));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug_str = format!("{:?}", secrets());

        assert!(debug_str.contains("my_api_key"));
        assert!(!debug_str.contains("msg_secret"));
        assert!(!debug_str.contains("tx_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}

//! Request-profile canonical string and authentication header assembly.

use crate::error::AuthError;
use crate::signer::RequestSigner;

/// Header carrying the raw API key.
pub const API_KEY_HEADER: &str = "X-API-Key";
/// Header carrying the decimal nonce.
pub const NONCE_HEADER: &str = "X-Nonce";
/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the request-profile canonical string.
///
/// `apiKey & nonce path`, followed by `?body` only when `body` is non-empty.
pub fn request_message(
    api_key: &str,
    nonce: u64,
    path: &str,
    body: Option<&str>,
) -> Result<String, AuthError> {
    if !path.starts_with('/') || path.contains('?') {
        return Err(AuthError::InvalidRequestPath(path.to_string()));
    }

    let mut message = format!("{}&{}{}", api_key, nonce, path);
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        message.push('?');
        message.push_str(body);
    }
    Ok(message)
}

/// Authentication headers for a single request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    api_key: String,
    nonce: u64,
    signature: String,
}

impl AuthHeaders {
    /// Sign a request and assemble its headers.
    ///
    /// The nonce must be fresh for this attempt; a retried request needs a
    /// new nonce and a new signature.
    pub fn sign(
        signer: &RequestSigner<'_>,
        nonce: u64,
        path: &str,
        body: Option<&str>,
    ) -> Result<Self, AuthError> {
        let api_key = signer.secrets().api_key();
        let message = request_message(api_key, nonce, path, body)?;
        let signature = signer.sign_request(&message);

        tracing::debug!(
            path = %path,
            nonce = nonce,
            has_body = body.is_some_and(|b| !b.is_empty()),
            "Request signed"
        );

        Ok(Self {
            api_key: api_key.to_string(),
            nonce,
            signature,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// All headers in transmission order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (API_KEY_HEADER, self.api_key.clone()),
            (NONCE_HEADER, self.nonce.to_string()),
            (SIGNATURE_HEADER, self.signature.clone()),
            ("Content-Type", JSON_CONTENT_TYPE.to_string()),
            ("Accept", JSON_CONTENT_TYPE.to_string()),
        ]
    }
}

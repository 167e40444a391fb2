use thiserror::Error;

/// Errors that can occur while loading secrets or signing requests.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required secret is missing or empty.
    #[error("Missing secret: {0}")]
    MissingSecret(String),

    /// The requested signature output encoding is not supported.
    #[error("Unsupported signature encoding '{0}', expected 'hex' or 'base64'")]
    UnsupportedEncoding(String),

    /// The request path is not a bare endpoint path.
    #[error("Invalid request path '{0}': must start with '/' and carry no query string")]
    InvalidRequestPath(String),
}

impl AuthError {
    /// Returns true for errors caused by process configuration rather than a
    /// single request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AuthError::MissingSecret(_) | AuthError::UnsupportedEncoding(_)
        )
    }
}

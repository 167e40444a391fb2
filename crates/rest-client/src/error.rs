//! REST client error types.

use thiserror::Error;

/// Errors that prevent a request from completing an HTTP exchange.
///
/// A non-2xx response is not an error at this layer; it is returned as an
/// [`HttpResponse`](crate::HttpResponse) for the caller to interpret.
#[derive(Debug, Error)]
pub enum RestError {
    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (DNS, TLS, refused connection).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to read the response body.
    #[error("Response body error: {0}")]
    Body(String),

    /// Failed to build the HTTP request.
    #[error("Request build error: {0}")]
    RequestBuild(String),
}

impl RestError {
    /// Check if the request may never have reached the server.
    pub fn is_connect(&self) -> bool {
        matches!(self, RestError::Connection(_))
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_connect() {
            RestError::Connection(err.to_string())
        } else if err.is_builder() {
            RestError::RequestBuild(err.to_string())
        } else if err.is_body() || err.is_decode() {
            RestError::Body(err.to_string())
        } else {
            RestError::Connection(err.to_string())
        }
    }
}

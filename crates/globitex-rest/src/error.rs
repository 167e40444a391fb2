//! Eurowallet API error types.

use crate::responses::{ApiError, ErrorResponse};
use auth::AuthError;
use rest_client::RestError;
use rust_decimal::Decimal;
use thiserror::Error;

/// A payment instruction that must not be signed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// A required field is empty.
    #[error("Missing required payment field: {0}")]
    MissingField(&'static str),

    /// Amount is zero or negative.
    #[error("Payment amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}

/// Errors that can occur when interacting with the Eurowallet API.
#[derive(Debug, Error)]
pub enum GlobitexError {
    /// Secret, encoding or request path problem.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The payment failed local validation; nothing was sent.
    #[error("Invalid payment: {0}")]
    Validation(#[from] PaymentError),

    /// The request did not complete an HTTP exchange.
    #[error("Transport error: {0}")]
    Transport(#[from] RestError),

    /// The service answered with a non-2xx status.
    #[error("Request rejected with HTTP {status}: {}", describe_rejection(.errors, .body))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Structured errors from the response body, if it could be parsed.
        errors: Vec<ApiError>,
        /// Raw response body.
        body: String,
    },

    /// A successful response did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GlobitexError {
    /// Build a rejection from a non-2xx response.
    ///
    /// The service returns errors as `{"errors": [{"code": .., "message": ..}]}`.
    /// Bodies in any other shape are kept verbatim with an empty error list.
    pub fn from_rejection(status: u16, body: String) -> Self {
        let errors = serde_json::from_str::<ErrorResponse>(&body)
            .map(|response| response.errors)
            .unwrap_or_default();

        Self::Rejected {
            status,
            errors,
            body,
        }
    }

    /// Check if the remote service rejected the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Check if the request failed before reaching a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Structured remote errors, empty for every other variant.
    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Self::Rejected { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn describe_rejection(errors: &[ApiError], body: &str) -> String {
    if errors.is_empty() {
        return body.to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Eurowallet API response types.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Response from GET /api/1/eurowallet/status.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountStatusResponse {
    pub accounts: Vec<Account>,
}

/// One Eurowallet account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub iban: String,
    /// `ACTIVE` or `CLOSE`.
    pub status: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub balance: Decimal,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("ACTIVE")
    }
}

/// Response from POST /api/1/eurowallet/payments.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponse {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    pub status: String,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// A single error reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)?;
        if let Some(data) = &self.data {
            write!(f, " ({})", data)?;
        }
        Ok(())
    }
}

/// Deserialize a Decimal from either a JSON string or a JSON number.
///
/// Numbers are read from their literal text, so no digits pass through f64.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
}

//! Transport abstraction between request signing and HTTP.

use crate::error::RestError;
use async_trait::async_trait;
use std::fmt;

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A fully signed request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Endpoint path, appended to the transport's base URL.
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
    /// Ordered form fields sent as `application/x-www-form-urlencoded`.
    pub form: Option<Vec<(&'static str, String)>>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>, headers: Vec<(&'static str, String)>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers,
            form: None,
        }
    }

    pub fn post_form(
        path: impl Into<String>,
        headers: Vec<(&'static str, String)>,
        form: Vec<(&'static str, String)>,
    ) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            headers,
            form: Some(form),
        }
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response of a completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends signed requests to the remote service.
///
/// Implementations must not retry, and must not alter headers that take part
/// in the request signature.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RestError>;
}

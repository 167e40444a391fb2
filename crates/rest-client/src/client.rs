//! `reqwest` implementation of the [`Transport`] trait.

use crate::error::RestError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// REST client sending requests relative to a base URL.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.globitex.com")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for RestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RestError> {
        let url = self.build_url(&request.path);
        tracing::debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        let has_form = request.form.is_some();
        for (key, value) in &request.headers {
            // The form body sets its own content type.
            if has_form && key.eq_ignore_ascii_case("content-type") {
                continue;
            }
            builder = builder.header(*key, value.as_str());
        }

        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status = status, url = %url, "Response received");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = RestClient::with_default_timeout("https://api.example.com").unwrap();
        assert_eq!(
            client.build_url("/api/1/eurowallet/status"),
            "https://api.example.com/api/1/eurowallet/status"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://api.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.build_url("/api/1/eurowallet/status"),
            "https://api.example.com/api/1/eurowallet/status"
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = RestClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let request = HttpRequest::get("/api/1/eurowallet/status", Vec::new());

        let err = client.send(request).await.unwrap_err();
        assert!(matches!(err, RestError::Connection(_) | RestError::Timeout));
    }
}

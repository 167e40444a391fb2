//! Globitex environment configuration.

use std::fmt;

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "GLOBITEX_BASE_URL";

/// Which Globitex deployment requests go to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GlobitexEnvironment {
    /// Production environment (real money).
    #[default]
    Production,
    /// Any other deployment, e.g. a local mock server.
    Custom(String),
}

impl GlobitexEnvironment {
    /// REST API base URL, without a trailing slash.
    pub fn rest_base_url(&self) -> &str {
        match self {
            Self::Production => "https://api.globitex.com",
            Self::Custom(url) => url.trim_end_matches('/'),
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Load environment from the `GLOBITEX_BASE_URL` env var.
    ///
    /// Returns `Production` if not set or empty.
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_VAR)
            .ok()
            .map(Self::from_base_url)
            .unwrap_or_default()
    }

    /// Map a base URL to an environment.
    pub fn from_base_url(url: String) -> Self {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Self::Production;
        }
        if trimmed.trim_end_matches('/') == Self::Production.rest_base_url() {
            return Self::Production;
        }
        Self::Custom(trimmed.to_string())
    }
}

impl fmt::Display for GlobitexEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Custom(url) => write!(f, "custom ({})", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_url() {
        let env = GlobitexEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://api.globitex.com");
        assert!(env.is_production());
    }

    #[test]
    fn test_custom_url_strips_trailing_slash() {
        let env = GlobitexEnvironment::Custom("http://localhost:8080/".into());
        assert_eq!(env.rest_base_url(), "http://localhost:8080");
        assert!(!env.is_production());
    }

    #[test]
    fn test_from_base_url() {
        assert_eq!(
            GlobitexEnvironment::from_base_url(String::new()),
            GlobitexEnvironment::Production
        );
        assert_eq!(
            GlobitexEnvironment::from_base_url("https://api.globitex.com/".into()),
            GlobitexEnvironment::Production
        );
        assert_eq!(
            GlobitexEnvironment::from_base_url("http://127.0.0.1:3000".into()),
            GlobitexEnvironment::Custom("http://127.0.0.1:3000".into())
        );
    }

    #[test]
    fn test_default() {
        assert_eq!(
            GlobitexEnvironment::default(),
            GlobitexEnvironment::Production
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(GlobitexEnvironment::Production.to_string(), "production");
        assert_eq!(
            GlobitexEnvironment::Custom("http://mock".into()).to_string(),
            "custom (http://mock)"
        );
    }
}

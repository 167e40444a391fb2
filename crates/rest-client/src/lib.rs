//! HTTP transport for signed API requests.
//!
//! This crate provides:
//!
//! - The [`Transport`] trait the signing layer hands requests to
//! - [`RestClient`], a thin `reqwest` implementation of it
//! - Consistent error handling via `RestError`
//!
//! Non-2xx responses are returned as ordinary [`HttpResponse`] values; only
//! failures to complete the exchange are errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{HttpRequest, RestClient, Transport};
//!
//! let client = RestClient::with_default_timeout("https://api.globitex.com")?;
//! let response = client.send(HttpRequest::get("/api/1/eurowallet/status", headers)).await?;
//! ```

mod client;
mod error;
mod transport;

pub use client::{RestClient, DEFAULT_TIMEOUT};
pub use error::RestError;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

//! Secrets, signing and authentication headers for the Globitex Eurowallet API.
//!
//! This crate provides the pure half of request authentication: nothing here
//! performs network I/O.
//!
//! # Features
//!
//! - **Secure Secrets**: the two signing keys are wrapped in `SecretString` to
//!   prevent accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA512 Signing**: hex or base64 output, with transaction
//!   signatures always rendered as lower-case hex.
//! - **Nonces**: millisecond nonces that strictly increase within the process.
//! - **Header Assembly**: the request-profile canonical string and the
//!   `X-API-Key` / `X-Nonce` / `X-Signature` header set.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{AuthHeaders, NonceGenerator, RequestSigner, SigningSecrets};
//!
//! let secrets = SigningSecrets::from_env()?;
//! let signer = RequestSigner::new(&secrets);
//! let nonces = NonceGenerator::new();
//!
//! let headers = AuthHeaders::sign(&signer, nonces.next(), "/api/1/eurowallet/status", None)?;
//! ```

mod credentials;
mod error;
mod headers;
mod nonce;
mod signer;

pub use credentials::{SigningSecrets, API_KEY_VAR, MESSAGE_SECRET_VAR, TRANSACTION_SECRET_VAR};
pub use error::AuthError;
pub use headers::{request_message, AuthHeaders, API_KEY_HEADER, NONCE_HEADER, SIGNATURE_HEADER};
pub use nonce::{now_ms, NonceGenerator};
pub use signer::{sign, RequestSigner, SignatureEncoding, SIGNATURE_ENCODING_VAR};

//! Globitex Eurowallet REST API client.
//!
//! This crate provides a typed client for the Eurowallet endpoints with:
//!
//! - **Dual signing**: payments carry a transaction signature over their
//!   canonical fields, and every request carries a request signature over
//!   API key, nonce, path and body
//! - **Account status**: balances and statuses of the Eurowallet accounts
//! - **Payment submission**: signed once, submitted once, never retried
//! - **Error handling**: validation, transport and remote rejections are
//!   distinct variants of `GlobitexError`
//!
//! # Example
//!
//! ```rust,ignore
//! use globitex_rest::{EurowalletClient, PaymentInstruction};
//! use rust_decimal_macros::dec;
//!
//! let client = EurowalletClient::from_env()?;
//!
//! let status = client.account_status().await?;
//!
//! let payment = PaymentInstruction::new(
//!     auth::now_ms(),
//!     "LT543080020000000224",
//!     dec!(1),
//!     "UAB Decentralized",
//!     "LT593910020000000053",
//!     "Invoice 42",
//! );
//! let response = client.submit_payment(payment).await?;
//! ```

mod client;
mod config;
mod error;
mod payment;
mod request;
mod responses;

pub use client::EurowalletClient;
pub use config::ClientConfig;
pub use error::{GlobitexError, PaymentError};
pub use payment::{PaymentInstruction, SignedPayment, TRANSACTION_SIGNATURE_FIELD};
pub use request::{EurowalletRequest, ACCOUNT_STATUS_PATH, PAYMENTS_PATH};
pub use responses::{Account, AccountStatusResponse, ApiError, ErrorResponse, PaymentResponse};

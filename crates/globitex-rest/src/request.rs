//! The signing pipeline shared by every Eurowallet request.

use crate::error::GlobitexError;
use crate::payment::PaymentInstruction;
use auth::{AuthHeaders, RequestSigner};
use rest_client::HttpRequest;

/// Account status endpoint.
pub const ACCOUNT_STATUS_PATH: &str = "/api/1/eurowallet/status";
/// Payment submission endpoint.
pub const PAYMENTS_PATH: &str = "/api/1/eurowallet/payments";

/// An authenticated Eurowallet call.
///
/// The variant decides which canonical profiles and keys apply: account
/// status carries only the request signature, a payment carries the
/// transaction signature inside the signed body as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EurowalletRequest {
    AccountStatus,
    SubmitPayment(PaymentInstruction),
}

impl EurowalletRequest {
    pub fn path(&self) -> &'static str {
        match self {
            Self::AccountStatus => ACCOUNT_STATUS_PATH,
            Self::SubmitPayment(_) => PAYMENTS_PATH,
        }
    }

    /// Sign the request with `nonce` and build the HTTP request to send.
    ///
    /// Any failure aborts before headers exist; nothing is sent.
    pub fn prepare(
        self,
        signer: &RequestSigner<'_>,
        nonce: u64,
    ) -> Result<HttpRequest, GlobitexError> {
        let path = self.path();

        match self {
            Self::AccountStatus => {
                let headers = AuthHeaders::sign(signer, nonce, path, None)?;
                Ok(HttpRequest::get(path, headers.to_pairs()))
            }
            Self::SubmitPayment(instruction) => {
                let signed = instruction.sign(signer)?;
                let body = signed.body_message();
                let headers = AuthHeaders::sign(signer, nonce, path, Some(&body))?;
                Ok(HttpRequest::post_form(
                    path,
                    headers.to_pairs(),
                    signed.form_fields(),
                ))
            }
        }
    }
}

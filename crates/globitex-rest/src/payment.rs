//! Payment instructions and the transaction canonical profile.

use crate::error::PaymentError;
use auth::RequestSigner;
use rust_decimal::Decimal;

/// Form field carrying the transaction signature.
pub const TRANSACTION_SIGNATURE_FIELD: &str = "transactionSignature";

/// A payment to be signed once and submitted once.
///
/// Field order on the wire is a property of [`PaymentInstruction::fields`],
/// not of how the instruction was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInstruction {
    request_time: u64,
    account: String,
    amount: Decimal,
    beneficiary_name: String,
    beneficiary_address: Option<String>,
    beneficiary_account: String,
    beneficiary_reference: String,
    use_gbx_for_fee: bool,
}

impl PaymentInstruction {
    /// Create a payment instruction.
    ///
    /// # Arguments
    /// * `request_time` - Milliseconds since the Unix epoch; fixed for the
    ///   lifetime of the instruction
    /// * `account` - Account the funds are taken from
    /// * `amount` - Exact amount; rendered with its own scale (`1.50` stays `1.50`)
    /// * `beneficiary_name` - Name registered for the beneficiary account
    /// * `beneficiary_account` - Beneficiary account number
    /// * `beneficiary_reference` - Payment reference shown to the beneficiary
    pub fn new(
        request_time: u64,
        account: impl Into<String>,
        amount: Decimal,
        beneficiary_name: impl Into<String>,
        beneficiary_account: impl Into<String>,
        beneficiary_reference: impl Into<String>,
    ) -> Self {
        Self {
            request_time,
            account: account.into(),
            amount,
            beneficiary_name: beneficiary_name.into(),
            beneficiary_address: None,
            beneficiary_account: beneficiary_account.into(),
            beneficiary_reference: beneficiary_reference.into(),
            use_gbx_for_fee: false,
        }
    }

    /// Set the beneficiary address. An empty address is treated as absent.
    pub fn with_beneficiary_address(mut self, address: impl Into<String>) -> Self {
        let address = address.into();
        self.beneficiary_address = (!address.is_empty()).then_some(address);
        self
    }

    /// Pay the transaction fee with GBX tokens.
    pub fn with_gbx_for_fee(mut self, use_gbx_for_fee: bool) -> Self {
        self.use_gbx_for_fee = use_gbx_for_fee;
        self
    }

    pub fn request_time(&self) -> u64 {
        self.request_time
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn beneficiary_name(&self) -> &str {
        &self.beneficiary_name
    }

    pub fn beneficiary_address(&self) -> Option<&str> {
        self.beneficiary_address.as_deref()
    }

    pub fn beneficiary_account(&self) -> &str {
        &self.beneficiary_account
    }

    pub fn beneficiary_reference(&self) -> &str {
        &self.beneficiary_reference
    }

    pub fn use_gbx_for_fee(&self) -> bool {
        self.use_gbx_for_fee
    }

    /// Check the fields the remote service requires.
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.request_time == 0 {
            return Err(PaymentError::MissingField("requestTime"));
        }

        let required = [
            ("account", &self.account),
            ("beneficiaryName", &self.beneficiary_name),
            ("beneficiaryAccount", &self.beneficiary_account),
            ("beneficiaryReference", &self.beneficiary_reference),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(PaymentError::MissingField(*name));
        }

        if self.amount <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }

    /// Transaction fields in canonical order.
    ///
    /// `beneficiaryAddress` appears only when set, `useGbxForFee` only when
    /// true, and an empty `beneficiaryReference` is left out.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("requestTime", self.request_time.to_string()),
            ("account", self.account.clone()),
            ("amount", self.amount.to_string()),
            ("beneficiaryName", self.beneficiary_name.clone()),
        ];

        if let Some(address) = &self.beneficiary_address {
            fields.push(("beneficiaryAddress", address.clone()));
        }

        fields.push(("beneficiaryAccount", self.beneficiary_account.clone()));

        if !self.beneficiary_reference.is_empty() {
            fields.push(("beneficiaryReference", self.beneficiary_reference.clone()));
        }

        if self.use_gbx_for_fee {
            fields.push(("useGbxForFee", "true".to_string()));
        }

        fields
    }

    /// The transaction canonical string: `name=value` pairs joined by `&`.
    pub fn canonical_message(&self) -> String {
        join_fields(&self.fields())
    }

    /// Validate, then sign the canonical string with the transaction key.
    ///
    /// Consumes the instruction; a signed payment cannot be altered or signed
    /// again.
    pub fn sign(self, signer: &RequestSigner<'_>) -> Result<SignedPayment, PaymentError> {
        self.validate()?;

        let signature = signer.sign_transaction(&self.canonical_message());

        tracing::debug!(
            request_time = self.request_time,
            account = %self.account,
            amount = %self.amount,
            "Transaction signed"
        );

        Ok(SignedPayment {
            instruction: self,
            signature,
        })
    }
}

/// A payment carrying its transaction signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayment {
    instruction: PaymentInstruction,
    signature: String,
}

impl SignedPayment {
    pub fn instruction(&self) -> &PaymentInstruction {
        &self.instruction
    }

    /// Lower-case hex transaction signature.
    pub fn transaction_signature(&self) -> &str {
        &self.signature
    }

    /// Body fields as transmitted: the transaction fields followed by
    /// `transactionSignature`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = self.instruction.fields();
        fields.push((TRANSACTION_SIGNATURE_FIELD, self.signature.clone()));
        fields
    }

    /// The unescaped body string covered by the request signature.
    pub fn body_message(&self) -> String {
        join_fields(&self.form_fields())
    }
}

fn join_fields(fields: &[(&'static str, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

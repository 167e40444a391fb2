//! HMAC-SHA512 signing for Eurowallet API requests and transactions.

use crate::credentials::SigningSecrets;
use crate::error::AuthError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::env::VarError;
use std::fmt;
use std::str::FromStr;

type HmacSha512 = Hmac<Sha512>;

/// Environment variable selecting the request signature encoding.
pub const SIGNATURE_ENCODING_VAR: &str = "GLOBITEX_SIGNATURE_ENCODING";

/// Textual rendering of an HMAC digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureEncoding {
    /// Lower-case hexadecimal.
    #[default]
    Hex,
    /// Standard base64 with padding.
    Base64,
}

impl SignatureEncoding {
    /// Load the encoding from `GLOBITEX_SIGNATURE_ENCODING`.
    ///
    /// Returns `Hex` if the variable is not set.
    ///
    /// # Errors
    /// Returns `AuthError::UnsupportedEncoding` if the variable holds anything
    /// other than `hex` or `base64`, including a value that is not UTF-8.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_var(std::env::var(SIGNATURE_ENCODING_VAR))
    }

    fn from_var(value: Result<String, VarError>) -> Result<Self, AuthError> {
        match value {
            Ok(value) => value.parse(),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(AuthError::UnsupportedEncoding(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }

    fn encode(&self, digest: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(digest),
            Self::Base64 => STANDARD.encode(digest),
        }
    }
}

impl fmt::Display for SignatureEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Base64 => write!(f, "base64"),
        }
    }
}

impl FromStr for SignatureEncoding {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            _ => Err(AuthError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Compute `HMAC-SHA512(key, message)` and render it with `encoding`.
pub fn sign(message: &[u8], key: &[u8], encoding: SignatureEncoding) -> String {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    encoding.encode(&mac.finalize().into_bytes())
}

/// Signer holding the two independent keys of a [`SigningSecrets`] set.
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    secrets: &'a SigningSecrets,
    encoding: SignatureEncoding,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer rendering request signatures as lower-case hex.
    pub fn new(secrets: &'a SigningSecrets) -> Self {
        Self::with_encoding(secrets, SignatureEncoding::Hex)
    }

    /// Create a signer with an explicit request signature encoding.
    pub fn with_encoding(secrets: &'a SigningSecrets, encoding: SignatureEncoding) -> Self {
        Self { secrets, encoding }
    }

    /// The secrets this signer draws from.
    pub fn secrets(&self) -> &'a SigningSecrets {
        self.secrets
    }

    /// Encoding used for request signatures.
    pub fn encoding(&self) -> SignatureEncoding {
        self.encoding
    }

    /// Sign a transaction canonical string with the transaction key.
    ///
    /// Always lower-case hex, whatever the request encoding is.
    pub fn sign_transaction(&self, message: &str) -> String {
        sign(
            message.as_bytes(),
            self.secrets.transaction_signing_key().as_bytes(),
            SignatureEncoding::Hex,
        )
        .to_ascii_lowercase()
    }

    /// Sign a request canonical string with the message key.
    pub fn sign_request(&self, message: &str) -> String {
        sign(
            message.as_bytes(),
            self.secrets.message_signing_key().as_bytes(),
            self.encoding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn secrets() -> SigningSecrets {
        SigningSecrets::new(
            "test-api-key".into(),
            "test-message-secret".into(),
            "test-transaction-secret".into(),
        )
        .unwrap()
    }

    #[test]
    fn test_sign_known_vector() {
        // RFC 4231, test case 2
        let signature = sign(
            b"what do ya want for nothing?",
            b"Jefe",
            SignatureEncoding::Hex,
        );

        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign(b"message", b"key", SignatureEncoding::Hex);
        let b = sign(b"message", b"key", SignatureEncoding::Hex);
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn test_hex_and_base64_carry_same_digest() {
        let hex_sig = sign(b"message", b"key", SignatureEncoding::Hex);
        let b64_sig = sign(b"message", b"key", SignatureEncoding::Base64);

        assert_eq!(hex::decode(hex_sig).unwrap(), STANDARD.decode(b64_sig).unwrap());
    }

    #[test]
    fn test_sign_base64_known_vector() {
        let signature = sign(
            b"test-api-key&1700000000123/api/1/eurowallet/status",
            b"test-message-secret",
            SignatureEncoding::Base64,
        );

        assert_eq!(
            signature,
            "wwDKZMAK1mKvcWI5LvhKggqO4PlX2Fqix1+UhAF1Njnwt1HlJYSp44LUJtuaEOpsLK+uUgVAodSfyWZmAvIILw=="
        );
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!("hex".parse::<SignatureEncoding>().unwrap(), SignatureEncoding::Hex);
        assert_eq!("HEX".parse::<SignatureEncoding>().unwrap(), SignatureEncoding::Hex);
        assert_eq!(
            "base64".parse::<SignatureEncoding>().unwrap(),
            SignatureEncoding::Base64
        );
        assert_eq!(SignatureEncoding::default(), SignatureEncoding::Hex);
    }

    #[test]
    fn test_parse_unknown_encoding_fails() {
        let err = "base32".parse::<SignatureEncoding>().unwrap_err();
        assert!(matches!(err, AuthError::UnsupportedEncoding(ref e) if e == "base32"));

        assert!("".parse::<SignatureEncoding>().is_err());
    }

    #[test]
    fn test_encoding_from_var() {
        assert_eq!(
            SignatureEncoding::from_var(Err(VarError::NotPresent)).unwrap(),
            SignatureEncoding::Hex
        );
        assert_eq!(
            SignatureEncoding::from_var(Ok("base64".into())).unwrap(),
            SignatureEncoding::Base64
        );
        assert!(matches!(
            SignatureEncoding::from_var(Ok("base32".into())),
            Err(AuthError::UnsupportedEncoding(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_encoding_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"b\xff64".to_vec());
        let err = SignatureEncoding::from_var(Err(VarError::NotUnicode(raw))).unwrap_err();

        assert!(matches!(err, AuthError::UnsupportedEncoding(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_transaction_signature_lower_case_hex() {
        let secrets = secrets();
        let signer = RequestSigner::with_encoding(&secrets, SignatureEncoding::Base64);

        let signature = signer.sign_transaction("requestTime=1&account=A");

        assert_eq!(signature.len(), 128);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_keys_are_independent() {
        let secrets = secrets();
        let signer = RequestSigner::new(&secrets);

        assert_ne!(signer.sign_transaction("same"), signer.sign_request("same"));
    }

    #[test]
    fn test_request_signature_follows_encoding() {
        let secrets = secrets();
        let message = "test-api-key&1700000000123/api/1/eurowallet/status";

        let hex_sig = RequestSigner::new(&secrets).sign_request(message);
        let b64_sig =
            RequestSigner::with_encoding(&secrets, SignatureEncoding::Base64).sign_request(message);

        assert_eq!(
            hex_sig,
            "c300ca64c00ad662af7162392ef84a820a8ee0f957d85aa2c75f948401753639\
             f0b751e52584a9e382d426db9a10ea6c2cafae520540a1d49fc9666602f2082f"
        );
        assert!(b64_sig.ends_with("=="));
    }

    #[test]
    fn test_sign_empty_message() {
        // Should not panic on empty message
        let signature = sign(b"", b"secret", SignatureEncoding::Hex);
        assert!(!signature.is_empty());
    }
}

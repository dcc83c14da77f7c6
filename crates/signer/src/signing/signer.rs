use chrono::{DateTime, Utc};

use super::result::SignResult;

/// Trait for the delegated signing capability.
///
/// Implementations are sync — signing is CPU-bound.
/// For async backends (e.g. KMS), use `spawn_blocking`.
pub trait Signer: Send + Sync {
    /// Sign an opaque content digest at the given instant.
    fn sign(&self, hash: &str, created: DateTime<Utc>) -> Result<SignResult, SigningError>;
}

/// Failure reported by a signing backend.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct SigningError {
    message: String,
}

impl SigningError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Rendering of `created` echoed back by the built-in backends.
pub(crate) const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub(crate) const SOFTWARE: &str = concat!("wacz-signer ", env!("CARGO_PKG_VERSION"));

/// Canonical bytes the built-in backends sign: `<created>:<hash>`.
pub(crate) fn signing_payload(hash: &str, created: DateTime<Utc>) -> Vec<u8> {
    format!("{}:{hash}", created.format(CREATED_FORMAT)).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn payload_is_created_colon_hash() {
        let created = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let payload = signing_payload("sha256:abcd", created);
        assert_eq!(payload, b"2023-01-01T00:00:00Z:sha256:abcd");
    }

    #[test]
    fn signing_error_displays_message() {
        let error = SigningError::new("bad key");
        assert_eq!(error.to_string(), "bad key");
    }
}

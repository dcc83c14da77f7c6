use anyhow::Result;
use chrono::{DateTime, Utc};
use k256::ecdsa::{SigningKey, signature::hazmat::PrehashSigner};
use sha2::{Digest, Sha256};

use super::result::{SignResult, SignValue};
use super::signer::{CREATED_FORMAT, SOFTWARE, Signer, SigningError, signing_payload};

/// ECDSA signing backend using the secp256k1 curve.
///
/// Created from a seed string — the SHA-256 hash of the seed
/// becomes the 32-byte private key.
pub struct Secp256k1Signer {
    signing_key: SigningKey,
}

impl Secp256k1Signer {
    pub fn from_seed(seed: &str) -> Result<Self> {
        let hash = Sha256::digest(seed.as_bytes());
        let signing_key = SigningKey::from_bytes((&hash).into())
            .map_err(|e| anyhow::anyhow!("invalid seed: {e}"))?;
        Ok(Self { signing_key })
    }

    /// Compressed public key bytes (33 bytes).
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }
}

impl Signer for Secp256k1Signer {
    fn sign(&self, hash: &str, created: DateTime<Utc>) -> Result<SignResult, SigningError> {
        let digest = Sha256::digest(signing_payload(hash, created));
        let signature: k256::ecdsa::Signature = self
            .signing_key
            .sign_prehash(digest.as_slice())
            .map_err(|e| SigningError::new(format!("secp256k1 signing failed: {e}")))?;

        let mut result = SignResult::new();
        result.insert("hash", SignValue::Text(hash.to_owned()));
        result.insert(
            "created",
            SignValue::Text(created.format(CREATED_FORMAT).to_string()),
        );
        result.insert("software", SignValue::Text(SOFTWARE.to_owned()));
        result.insert("algorithm", SignValue::Text("secp256k1".to_owned()));
        result.insert(
            "signature",
            SignValue::Bytes(hex::encode(signature.to_bytes()).into_bytes()),
        );
        result.insert(
            "publicKey",
            SignValue::Bytes(hex::encode(self.public_key_bytes()).into_bytes()),
        );
        Ok(result)
    }
}

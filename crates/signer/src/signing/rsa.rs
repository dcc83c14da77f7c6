use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::signature::{SignatureEncoding, Signer as _};
use sha2::{Digest, Sha256};

use super::result::{SignResult, SignValue};
use super::signer::{CREATED_FORMAT, SOFTWARE, Signer, SigningError, signing_payload};

const RSA_KEY_BITS: usize = 2048;

/// RSA PKCS#1 v1.5 signing backend with SHA-256 digest.
///
/// Created from a seed string — the SHA-256 hash of the seed
/// seeds a deterministic CSPRNG used for RSA key generation.
pub struct RsaSigner {
    signing_key: SigningKey<Sha256>,
    public_key_der: Vec<u8>,
}

impl RsaSigner {
    pub fn from_seed(seed: &str) -> Result<Self> {
        let hash = Sha256::digest(seed.as_bytes());
        let mut rng = ChaCha20Rng::from_seed(hash.into());
        let private_key =
            RsaPrivateKey::new(&mut rng, RSA_KEY_BITS).context("generating RSA key from seed")?;
        let public_key_der = private_key
            .to_public_key()
            .to_public_key_der()
            .context("encoding RSA public key to DER")?
            .into_vec();
        let signing_key = SigningKey::<Sha256>::new(private_key);
        Ok(Self {
            signing_key,
            public_key_der,
        })
    }

    /// DER-encoded SubjectPublicKeyInfo bytes.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key_der.clone()
    }
}

impl Signer for RsaSigner {
    fn sign(&self, hash: &str, created: DateTime<Utc>) -> Result<SignResult, SigningError> {
        let signature = self
            .signing_key
            .try_sign(&signing_payload(hash, created))
            .map_err(|e| SigningError::new(format!("rsa signing failed: {e}")))?;

        let mut result = SignResult::new();
        result.insert("hash", SignValue::Text(hash.to_owned()));
        result.insert(
            "created",
            SignValue::Text(created.format(CREATED_FORMAT).to_string()),
        );
        result.insert("software", SignValue::Text(SOFTWARE.to_owned()));
        result.insert(
            "algorithm",
            SignValue::Text("rsa-pkcs1v15-sha256".to_owned()),
        );
        result.insert("keyBits", SignValue::Int(RSA_KEY_BITS as i64));
        result.insert(
            "signature",
            SignValue::Bytes(hex::encode(signature.to_vec()).into_bytes()),
        );
        result.insert(
            "publicKey",
            SignValue::Bytes(hex::encode(&self.public_key_der).into_bytes()),
        );
        Ok(result)
    }
}

mod result;
mod rsa;
mod secp256k1;
mod signer;

pub use result::{SignResult, SignValue};
pub use self::rsa::RsaSigner;
pub use secp256k1::Secp256k1Signer;
pub use signer::{Signer, SigningError};

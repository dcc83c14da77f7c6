pub mod error;
pub mod server;
pub mod signing;
pub mod timestamp;

pub use error::SignServerError;
pub use server::{AppState, SignRequest, router, run};
pub use signing::{RsaSigner, Secp256k1Signer, SignResult, SignValue, Signer, SigningError};
pub use timestamp::{TimestampFormatError, parse_created};

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use wacz_signer::{AppState, RsaSigner, Secp256k1Signer, Signer, run};

#[derive(Debug, Clone, ValueEnum)]
enum SigningAlgorithm {
    Secp256k1,
    Rsa,
}

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = "127.0.0.1")]
    host: String,
    #[clap(long, default_value = "3000")]
    port: u16,
    #[clap(long, env = "SIGNING_KEY_SEED")]
    signing_key_seed: String,
    #[clap(long, env = "SIGNING_ALGORITHM", default_value = "secp256k1")]
    signing_algorithm: SigningAlgorithm,
    #[clap(long, env = "SIGNING_AUTH_TOKEN")]
    auth_token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let signer: Arc<dyn Signer> = match args.signing_algorithm {
        SigningAlgorithm::Secp256k1 => {
            Arc::new(Secp256k1Signer::from_seed(&args.signing_key_seed)?)
        }
        SigningAlgorithm::Rsa => Arc::new(RsaSigner::from_seed(&args.signing_key_seed)?),
    };

    run(
        args.host,
        args.port,
        AppState {
            signer,
            auth_token: args.auth_token,
        },
    )
    .await
}

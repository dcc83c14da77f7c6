use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use serde_json::json;

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = "http://127.0.0.1:3000")]
    url: String,
    /// Opaque content digest to sign, e.g. `sha256:<hex>`.
    #[clap(long)]
    hash: String,
    /// UTC timestamp with trailing Z; defaults to now.
    #[clap(long)]
    created: Option<String>,
    #[clap(long, env = "SIGNING_TOKEN")]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let created = args
        .created
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string());

    let mut request = reqwest::Client::new()
        .post(format!("{}/sign", args.url.trim_end_matches('/')))
        .json(&json!({ "hash": args.hash, "created": created }));

    if let Some(token) = args.token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.context("sending sign request")?;
    let status = response.status();
    let body: serde_json::Value = response.json().await.context("decoding sign response")?;

    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        bail!("signing failed with status {status}");
    }

    Ok(())
}

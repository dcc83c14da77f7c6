use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::error::SignServerError;
use crate::signing::Signer;
use crate::timestamp::parse_created;

/// Shared service state: the injected signing capability plus the
/// optional bearer token required on `/sign`.
#[derive(Clone)]
pub struct AppState {
    pub signer: Arc<dyn Signer>,
    pub auth_token: Option<String>,
}

/// One signing request body. `hash` is opaque and passed through as given.
#[derive(Debug, Clone, Deserialize)]
pub struct SignRequest {
    pub hash: String,
    pub created: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/healthcheck",
            get(|| async move { (StatusCode::OK, "Ok").into_response() }),
        )
        .route("/sign", post(sign_handler))
        .with_state(state)
}

pub async fn run(host: String, port: u16, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!(%host, port, "signing server listening");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn sign_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SignRequest>,
) -> Result<Json<serde_json::Value>, SignServerError> {
    authorize(&state, &headers)?;

    let created = parse_created(&request.created)?;

    let result = state
        .signer
        .sign(&request.hash, created)
        .inspect_err(|error| tracing::warn!(%error, hash = %request.hash, "signing failed"))?;

    tracing::debug!(hash = %request.hash, "signed request");
    Ok(Json(result.into_json()))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), SignServerError> {
    let Some(expected) = &state.auth_token else {
        return Ok(());
    };

    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| SignServerError::Unauthorized("missing Authorization header".into()))?;

    match presented.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && token_matches(token, expected) => {
            Ok(())
        }
        _ => Err(SignServerError::Unauthorized("invalid bearer token".into())),
    }
}

/// Constant-time comparison of bearer tokens.
///
/// When lengths differ, performs a dummy comparison so timing does not
/// leak the configured token's length.
fn token_matches(presented: &str, expected: &str) -> bool {
    let presented = presented.as_bytes();
    let expected = expected.as_bytes();
    if presented.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    presented.ct_eq(expected).into()
}

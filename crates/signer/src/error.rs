use axum::Json;
use axum::http::StatusCode;
use axum_core::response::{IntoResponse as AxumCoreIntoResponse, Response};
use eyre::Report;
use serde_json::json;

use crate::signing::SigningError;
use crate::timestamp::TimestampFormatError;

/// Errors surfaced by the signing endpoint.
///
/// Every variant renders a JSON body with a single `error` key, so
/// clients can always detect failure from the body alone in addition
/// to the status code.
#[derive(Debug, thiserror::Error)]
pub enum SignServerError {
    #[error(transparent)]
    Unexpected(#[from] Report),
    #[error("invalid created timestamp: {0}")]
    BadTimestamp(#[from] TimestampFormatError),
    #[error(transparent)]
    Signing(#[from] SigningError),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl AxumCoreIntoResponse for SignServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            SignServerError::BadTimestamp(_) => StatusCode::BAD_REQUEST,
            SignServerError::Signing(_) => StatusCode::BAD_GATEWAY,
            SignServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            SignServerError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            // Never leak internal details for unexpected failures.
            SignServerError::Unexpected(_) => "something went wrong".to_string(),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_timestamp_returns_400() {
        let error = SignServerError::BadTimestamp(TimestampFormatError("nope".into()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn signing_failure_returns_502() {
        let error = SignServerError::Signing(SigningError::new("bad key"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unauthorized_returns_401() {
        let error = SignServerError::Unauthorized("invalid bearer token".into());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn unexpected_returns_500() {
        let error = SignServerError::Unexpected(eyre::eyre!("boom"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

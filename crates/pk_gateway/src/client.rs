//! Blocking HTTP client for the prediction service.

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use pk_core::{Prediction, PredictionGateway, RoundError, ShotRequest};

use crate::wire::{PredictRequest, PredictResponse};

/// HTTP status codes that indicate transient server errors (retryable)
const RETRYABLE_STATUS_CODES: &[u16] = &[502, 503, 504];

/// Maximum number of retry attempts for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds (doubles with each retry)
const INITIAL_BACKOFF_MS: u64 = 100;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body shape the prediction service uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

/// Transport-level failures, before mapping into the engine's error set.
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Client for the keeper-dive model's `/predict` endpoint.
#[derive(Debug)]
pub struct HttpPredictionGateway {
    client: Client,
    base_url: String,
}

impl HttpPredictionGateway {
    /// `base_url` without a trailing path, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self { client, base_url: base_url.into().trim_end_matches('/').to_string() })
    }

    /// POST the shot description, retrying transient server errors
    /// (502/503/504) with exponential backoff: 100ms, 200ms, 400ms.
    /// Returns the raw response body; decoding stays with the caller so
    /// a malformed payload is classified as a prediction problem, not a
    /// transport one.
    fn post_predict(&self, body: &PredictRequest<'_>) -> Result<String, GatewayError> {
        let url = format!("{}/predict", self.base_url);

        for attempt in 0..=MAX_RETRIES {
            let result = self
                .client
                .post(&url)
                .json(body)
                .send()
                .map_err(|e| GatewayError::Transport(e.to_string()))?;

            let status = result.status().as_u16();
            if RETRYABLE_STATUS_CODES.contains(&status) && attempt < MAX_RETRIES {
                let backoff = Duration::from_millis(INITIAL_BACKOFF_MS * 2u64.pow(attempt));
                warn!(
                    status = status,
                    attempt = attempt + 1,
                    max_attempts = MAX_RETRIES + 1,
                    backoff_ms = backoff.as_millis() as u64,
                    "Retryable HTTP error, backing off"
                );
                std::thread::sleep(backoff);
                continue;
            }

            return parse_response(result);
        }
        unreachable!("final attempt always returns")
    }
}

fn parse_response(response: Response) -> Result<String, GatewayError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    if status >= 400 {
        // Surface the service's human-readable detail when present.
        let message = match serde_json::from_str::<ErrorDetail>(&text) {
            Ok(detail) => detail.detail.to_string(),
            Err(_) => text,
        };
        return Err(GatewayError::Rejected { status, message });
    }

    Ok(text)
}

impl PredictionGateway for HttpPredictionGateway {
    fn predict(&self, request: &ShotRequest) -> pk_core::Result<Prediction> {
        request.validate()?;
        let body = PredictRequest::from(request);
        let text = self
            .post_predict(&body)
            .map_err(|e| RoundError::GatewayUnavailable(e.to_string()))?;
        // Missing fields or a non-JSON body are model contract breaches,
        // reported as InvalidPrediction via the serde conversion.
        let response: PredictResponse = serde_json::from_str(&text)?;
        response.into_prediction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let gateway = HttpPredictionGateway::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(gateway.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_invalid_request_rejected_before_network() {
        // No server is listening here; validation must fail first.
        let gateway = HttpPredictionGateway::new("http://127.0.0.1:1").unwrap();
        let request = ShotRequest {
            team: "XXX".to_string(),
            foot: pk_core::Foot::Right,
            target_zone: 5,
            penalty_number: 1,
            elimination: false,
        };
        assert!(matches!(
            gateway.predict(&request),
            Err(RoundError::InvalidRequest(_))
        ));
    }
}

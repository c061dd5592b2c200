use async_trait::async_trait;
use common::{FeatureVector, PredictionErrorBody, PredictionResult};
use thiserror::Error;

use crate::endpoint::configured_endpoint;
use crate::error::PredictionError;

/// Status and body of an HTTP response, whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request could not be completed at all.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one JSON POST and hands back the raw response.
///
/// Futures are not required to be `Send` because the browser transport runs
/// on the single-threaded WASM executor.
#[async_trait(?Send)]
pub trait PredictionTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError>;
}

/// One-shot client for the remote prediction endpoint.
///
/// No retries, no timeout and no cancellation: each call is a single
/// request/response exchange.
pub struct PredictionClient<T> {
    endpoint: Option<String>,
    transport: T,
}

impl<T: PredictionTransport> PredictionClient<T> {
    pub fn new(endpoint: Option<String>, transport: T) -> Self {
        Self { endpoint, transport }
    }

    /// Usable endpoint, if any.
    pub fn endpoint(&self) -> Option<&str> {
        configured_endpoint(self.endpoint.as_deref())
    }

    /// Request a classification for `features`.
    ///
    /// Fails with [`PredictionError::Configuration`] before any network
    /// activity when no endpoint is configured.
    pub async fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictionError> {
        let Some(endpoint) = self.endpoint() else {
            log::error!("Prediction requested without a configured endpoint");
            return Err(PredictionError::Configuration);
        };

        let body = serde_json::to_string(features).map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            PredictionError::Transport(format!("Failed to encode prediction request: {}", e))
        })?;

        log::debug!("POST request to: {} ({} features)", endpoint, features.len());
        let response = self
            .transport
            .post_json(endpoint, body)
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", endpoint, e);
                PredictionError::Transport(e.0)
            })?;

        let result = interpret_response(response);
        match &result {
            Ok(prediction) => log::info!(
                "POST {} - Predicted label {} ({})",
                endpoint,
                prediction.predicted_label,
                prediction.predicted_status
            ),
            Err(e) => log::error!("POST {} - {}", endpoint, e),
        }
        result
    }
}

/// Map a raw response onto a prediction or an error.
///
/// Non-success statuses use the body's `error` field when present and
/// non-empty, otherwise `HTTP error {status}`.
pub fn interpret_response(response: TransportResponse) -> Result<PredictionResult, PredictionError> {
    if !response.is_success() {
        log::warn!("Non-OK response: {}", response.status);
        let message = serde_json::from_str::<PredictionErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("HTTP error {}", response.status));
        return Err(PredictionError::Http {
            status: response.status,
            message,
        });
    }

    serde_json::from_str::<PredictionResult>(&response.body)
        .map_err(|e| PredictionError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{FeatureCatalog, Probabilities};
    use std::cell::RefCell;

    /// Replays a canned answer and records every request.
    struct MockTransport {
        reply: Result<TransportResponse, TransportError>,
        requests: RefCell<Vec<(String, String)>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(TransportResponse::new(status, body)),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(TransportError(message.to_string())),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl PredictionTransport for &MockTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
            self.requests.borrow_mut().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    const ENDPOINT: &str = "https://api.example.com/prod/predict";

    fn features() -> FeatureVector {
        FeatureCatalog::builtin().defaults()
    }

    #[tokio::test]
    async fn test_unset_endpoint_never_calls_network() {
        let transport = MockTransport::replying(200, "{}");
        for endpoint in [None, Some(String::new()), Some(crate::PLACEHOLDER_ENDPOINT.to_string())] {
            let client = PredictionClient::new(endpoint, &transport);
            let result = client.predict(&features()).await;
            assert_eq!(result, Err(PredictionError::Configuration));
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_response() {
        let transport =
            MockTransport::replying(200, r#"{"predicted_status": "Normal", "predicted_label": 0}"#);
        let client = PredictionClient::new(Some(ENDPOINT.to_string()), &transport);

        let result = client.predict(&features()).await.unwrap();
        assert_eq!(result.predicted_label, 0);
        assert_eq!(result.predicted_status, "Normal");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_request_body_is_feature_object() {
        let transport =
            MockTransport::replying(200, r#"{"predicted_status": "Normal", "predicted_label": 0}"#);
        let client = PredictionClient::new(Some(ENDPOINT.to_string()), &transport);
        client.predict(&features()).await.unwrap();

        let requests = transport.requests.borrow();
        let (url, body) = &requests[0];
        assert_eq!(url, ENDPOINT);
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 30);
        assert_eq!(json["gearbox_temperature_c_mean"], 75.0);
    }

    #[tokio::test]
    async fn test_http_error_uses_error_field() {
        let transport = MockTransport::replying(500, r#"{"error": "bad input"}"#);
        let client = PredictionClient::new(Some(ENDPOINT.to_string()), &transport);

        let error = client.predict(&features()).await.unwrap_err();
        assert_eq!(error.to_string(), "bad input");
        assert!(matches!(error, PredictionError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_http_error_falls_back_to_status() {
        for body in ["{}", "<html>Bad Gateway</html>", r#"{"error": ""}"#] {
            let transport = MockTransport::replying(502, body);
            let client = PredictionClient::new(Some(ENDPOINT.to_string()), &transport);
            let error = client.predict(&features()).await.unwrap_err();
            assert_eq!(error.to_string(), "HTTP error 502");
        }
    }

    #[tokio::test]
    async fn test_transport_failure_message_is_kept() {
        let transport = MockTransport::failing("Failed to fetch");
        let client = PredictionClient::new(Some(ENDPOINT.to_string()), &transport);

        let error = client.predict(&features()).await.unwrap_err();
        assert_eq!(error, PredictionError::Transport("Failed to fetch".to_string()));
        assert_eq!(error.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let result = interpret_response(TransportResponse::new(200, "not json"));
        assert!(matches!(result, Err(PredictionError::Decode(_))));

        let wrong_shape = interpret_response(TransportResponse::new(200, r#"{"label": 1}"#));
        assert!(matches!(wrong_shape, Err(PredictionError::Decode(_))));
    }

    #[test]
    fn test_probabilities_marker_passes_through() {
        let result = interpret_response(TransportResponse::new(
            200,
            r#"{"predicted_status": "Normal", "predicted_label": 0, "prediction_probabilities": "N/A"}"#,
        ))
        .unwrap();
        assert_eq!(result.prediction_probabilities, Some(Probabilities::NotAvailable));
    }
}

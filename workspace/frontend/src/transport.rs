use async_trait::async_trait;
use dashboard::{PredictionTransport, TransportError, TransportResponse};
use gloo_net::http::Request;

/// Browser `fetch` transport for the prediction endpoint.
pub struct GlooTransport;

#[async_trait(?Send)]
impl PredictionTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(TransportResponse::new(status, body))
    }
}

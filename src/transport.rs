use async_trait::async_trait;
use dashboard::{PredictionTransport, TransportError, TransportResponse};
use tracing::trace;

/// Blocking `ureq` transport, run off the async runtime.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl PredictionTransport for UreqTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        let agent = self.agent.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || {
            trace!("POST {} ({} bytes)", url, body.len());
            let result = agent
                .post(&url)
                .set("Content-Type", "application/json")
                .send_string(&body);

            // Error statuses still carry a body the client needs to read
            let response = match result {
                Ok(response) => response,
                Err(ureq::Error::Status(_, response)) => response,
                Err(ureq::Error::Transport(e)) => return Err(TransportError(e.to_string())),
            };

            let status = response.status();
            let body = response
                .into_string()
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(TransportResponse::new(status, body))
        })
        .await
        .map_err(|e| TransportError(e.to_string()))?
    }
}

use common::{ApiResponse, FrontendSettings};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

/// Common GET request handler for the windwatch API
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Runtime settings injected by the server: prediction endpoint and form fields
pub async fn get_frontend_settings() -> Result<FrontendSettings, String> {
    log::trace!("Fetching frontend settings");
    let result: Result<FrontendSettings, String> = get("/settings").await;
    if let Ok(settings) = &result {
        log::info!(
            "Server settings: endpoint {}, {} feature fields",
            if settings.prediction_endpoint.is_some() { "configured" } else { "missing" },
            settings.feature_fields.len()
        );
    }
    result
}

use axum::{extract::State, response::Json};
use common::{ApiResponse, FrontendSettings};
use tracing::{debug, instrument};

use crate::schemas::AppState;

/// Runtime settings for the dashboard
///
/// Hands the browser the prediction endpoint and the ordered feature fields,
/// so neither is compiled into the frontend bundle.
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Settings retrieved successfully", body = common::SettingsResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_frontend_settings(
    State(state): State<AppState>,
) -> Json<ApiResponse<FrontendSettings>> {
    let settings = FrontendSettings {
        prediction_endpoint: state.config.prediction_endpoint.clone(),
        feature_fields: state.catalog.fields().to_vec(),
    };
    debug!(
        "Serving settings with {} feature fields (endpoint configured: {})",
        settings.feature_fields.len(),
        settings.prediction_endpoint.is_some()
    );

    Json(ApiResponse {
        data: settings,
        message: "Settings retrieved successfully".to_string(),
        success: true,
    })
}

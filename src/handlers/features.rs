use axum::{extract::rejection::JsonRejection, response::Json};
use axum_valid::{Valid, ValidRejection};
use common::{ApiResponse, FeatureWindow};
use compute::{WindowConfig, WindowExtractor};
use tracing::{debug, info, instrument, warn};

use super::ApiError;
use crate::schemas::FeatureWindowsRequest;

const UNKNOWN_TURBINE: &str = "unknown_turbine";

/// Extract sliding-window features from raw readings
#[utoipa::path(
    post,
    path = "/api/v1/features/windows",
    tag = "features",
    request_body = FeatureWindowsRequest,
    responses(
        (status = 200, description = "Windows extracted successfully", body = common::FeatureWindowsResponse),
        (status = 400, description = "Malformed body or invalid window configuration", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn extract_feature_windows(
    payload: Result<Valid<Json<FeatureWindowsRequest>>, ValidRejection<JsonRejection>>,
) -> Result<Json<ApiResponse<Vec<FeatureWindow>>>, ApiError> {
    let Valid(Json(request)) = payload.map_err(|rejection| {
        warn!("Rejected feature window request: {}", rejection);
        ApiError::from(rejection)
    })?;
    debug!("Received {} readings", request.readings.len());
    let defaults = WindowConfig::default();
    let config = WindowConfig {
        window_size: request.window_size.unwrap_or(defaults.window_size),
        step: request.step.unwrap_or(defaults.step),
    };
    let turbine_id = request.turbine_id.as_deref().unwrap_or(UNKNOWN_TURBINE);

    let windows = WindowExtractor::new(config)?.extract(turbine_id, &request.readings)?;
    info!("Extracted {} windows for {}", windows.len(), turbine_id);

    Ok(Json(ApiResponse {
        message: format!("Extracted {} windows", windows.len()),
        data: windows,
        success: true,
    }))
}

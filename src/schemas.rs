use common::{
    FeatureCatalog, FeatureField, FeatureWindow, FeatureWindowsResponse, FrontendSettings,
    SensorReading, SettingsResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use validator::Validate;

use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Immutable runtime configuration
    pub config: Arc<AppConfig>,
    /// Fields the dashboard form renders, in order
    pub catalog: Arc<FeatureCatalog>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Request to turn raw readings into feature windows
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct FeatureWindowsRequest {
    /// Turbine identifier copied into every window (defaults to "unknown_turbine")
    pub turbine_id: Option<String>,
    /// Readings per window (default 10)
    #[validate(range(min = 1, max = 10000))]
    pub window_size: Option<usize>,
    /// Readings between window starts (default 5)
    #[validate(range(min = 1, max = 10000))]
    pub step: Option<usize>,
    /// Raw readings in any order
    pub readings: Vec<SensorReading>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::settings::get_frontend_settings,
        crate::handlers::features::extract_feature_windows,
    ),
    components(
        schemas(
            SettingsResponse,
            FeatureWindowsResponse,
            ErrorResponse,
            HealthResponse,
            FeatureWindowsRequest,
            FrontendSettings,
            FeatureField,
            FeatureWindow,
            SensorReading,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "settings", description = "Runtime settings for the dashboard"),
        (name = "features", description = "Sliding-window feature extraction"),
    ),
    info(
        title = "Windwatch API",
        description = "Wind turbine predictive maintenance dashboard backend",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

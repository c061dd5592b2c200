//! Common transport-layer types shared between the server, the CLI and the frontend.
//! These structs describe the JSON exchanged with the prediction endpoint and with
//! the windwatch API so every side deserializes the same shapes.

mod features;
mod history;
mod prediction;
mod readings;
mod vector;

pub use features::{FeatureCatalog, FeatureField, SensorChannel, Statistic, feature_name, humanize};
pub use history::HistoryPoint;
pub use prediction::{
    CONFIGURATION_ERROR_STATUS, FailureClass, PredictionErrorBody, PredictionResult,
    Probabilities, SENTINEL_LABEL,
};
pub use readings::{FeatureWindow, SensorReading};
pub use vector::FeatureVector;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    SettingsResponse = ApiResponse<FrontendSettings>,
    FeatureWindowsResponse = ApiResponse<Vec<FeatureWindow>>
)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Settings =====================

/// Runtime configuration handed to the dashboard on startup.
///
/// The prediction endpoint is never compiled into the frontend; the server
/// reads it from its own configuration and exposes it here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FrontendSettings {
    /// URL of the remote prediction endpoint, if one is configured
    pub prediction_endpoint: Option<String>,
    /// Ordered form fields expected by the model
    pub feature_fields: Vec<FeatureField>,
}

use thiserror::Error;

/// Why a prediction attempt produced no model result.
///
/// The `Display` output is exactly the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// No usable endpoint; the network is never touched
    #[error("Prediction endpoint is not configured. Set WINDWATCH_PREDICTION_ENDPOINT on the server or the windwatch_prediction_endpoint browser setting.")]
    Configuration,

    /// Endpoint answered with a non-success status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Request never produced a response
    #[error("{0}")]
    Transport(String),

    /// Success response that does not match the expected schema
    #[error("Invalid prediction response: {0}")]
    Decode(String),
}

impl PredictionError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, PredictionError::Configuration)
    }
}

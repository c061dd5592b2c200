use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Window size or step that cannot produce windows
    #[error("Invalid window configuration: {0}")]
    InvalidWindow(String),

    /// Simulation parameters that cannot fit the requested scenario
    #[error("Simulation error: {0}")]
    Simulation(String),

    /// Statistics requested over an empty series
    #[error("Empty series: {0}")]
    EmptySeries(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;

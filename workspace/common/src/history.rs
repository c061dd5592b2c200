use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One point of the sample sensor history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryPoint {
    /// Axis label, `T-0`, `T-1`, ...
    pub name: String,
    /// Gearbox temperature in °C
    pub temperature: f64,
    /// Vibration in g
    pub vibration: f64,
    /// Generator power in kW
    pub power: f64,
}

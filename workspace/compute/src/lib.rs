//! Native number crunching behind the windwatch tooling: synthetic turbine
//! telemetry and the sliding-window features the failure model consumes.

pub mod error;
pub mod simulation;
pub mod stats;
pub mod windows;

pub use error::{ComputeError, Result};
pub use simulation::{Anomaly, OperatingProfile, SimulatedTurbine, TurbineSimulator};
pub use stats::Summary;
pub use windows::{WindowConfig, WindowExtractor, turbine_id_from_source};

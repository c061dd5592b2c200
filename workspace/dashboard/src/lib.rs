//! Dashboard behaviour that does not depend on a renderer.
//!
//! The Yew frontend drives these types from event handlers; the CLI reuses the
//! prediction client with a blocking HTTP transport. Everything here runs
//! natively, so the rules are unit tested without a browser.

pub mod chart;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod history;
pub mod state;

pub use client::{PredictionClient, PredictionTransport, TransportError, TransportResponse};
pub use endpoint::{PLACEHOLDER_ENDPOINT, configured_endpoint};
pub use error::PredictionError;
pub use form::{FormState, parse_input};
pub use history::{SAMPLE_HISTORY_LEN, generate_sample_history, sample_history};
pub use state::{
    BUSY_LABEL, DashboardAction, DashboardState, IDLE_LABEL, ResultTone, probability_summary,
};

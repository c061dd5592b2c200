use common::{FailureClass, FeatureCatalog, PredictionResult, SENTINEL_LABEL};

use crate::endpoint::configured_endpoint;
use crate::error::PredictionError;
use crate::form::FormState;

/// Submit button text while idle.
pub const IDLE_LABEL: &str = "Get prediction";

/// Submit button text while a request is in flight.
pub const BUSY_LABEL: &str = "Processing...";

/// Styling family of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    Success,
    Warning,
    Failure,
}

impl ResultTone {
    /// 0 is healthy, the sentinel is a warning, every other label is a failure.
    pub fn for_label(label: i64) -> Self {
        match label {
            0 => ResultTone::Success,
            SENTINEL_LABEL => ResultTone::Warning,
            _ => ResultTone::Failure,
        }
    }
}

/// Caption for the probability list, one entry per known class.
///
/// Classes the model did not report a probability for read `N/A`.
pub fn probability_summary(probabilities: &[f64]) -> String {
    FailureClass::ALL
        .iter()
        .enumerate()
        .map(|(index, class)| match probabilities.get(index) {
            Some(p) => format!("{}: {:.2}%", class.caption(), p * 100.0),
            None => format!("{}: N/A", class.caption()),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything the dashboard page renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub form: FormState,
    pub endpoint: Option<String>,
    pub busy: bool,
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
}

/// State transitions triggered by the page.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Runtime settings arrived; a catalog, when given, replaces the form fields.
    Configure {
        endpoint: Option<String>,
        catalog: Option<FeatureCatalog>,
    },
    /// A keystroke in one input.
    Edit { field: String, raw: String },
    /// Restore catalog defaults.
    Reset,
    /// A request is about to be sent.
    Begin,
    /// The request settled.
    Finish(Result<PredictionResult, PredictionError>),
}

impl DashboardState {
    pub fn new(form: FormState, endpoint: Option<String>) -> Self {
        Self {
            form,
            endpoint,
            ..Self::default()
        }
    }

    /// Endpoint the next request would use.
    pub fn endpoint(&self) -> Option<&str> {
        configured_endpoint(self.endpoint.as_deref())
    }

    pub fn apply(mut self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::Configure { endpoint, catalog } => {
                self.endpoint = endpoint;
                // Same catalog as the form already holds: keep what was typed.
                if let Some(catalog) = catalog.filter(|c| c != self.form.catalog()) {
                    self.form.replace_catalog(catalog);
                }
            }
            DashboardAction::Edit { field, raw } => {
                self.form.set_raw(&field, &raw);
            }
            DashboardAction::Reset => self.form.reset(),
            DashboardAction::Begin => {
                self.busy = true;
                self.error = None;
            }
            DashboardAction::Finish(Ok(result)) => {
                self.busy = false;
                self.error = None;
                self.result = Some(result);
            }
            DashboardAction::Finish(Err(error)) => {
                self.busy = false;
                self.result = error
                    .is_configuration()
                    .then(PredictionResult::configuration_error);
                self.error = Some(error.to_string());
            }
        }
        self
    }

    pub fn tone(&self) -> Option<ResultTone> {
        self.result
            .as_ref()
            .map(|result| ResultTone::for_label(result.predicted_label))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy { BUSY_LABEL } else { IDLE_LABEL }
    }
}

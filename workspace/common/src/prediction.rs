use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Label synthesized locally when the endpoint could not be contacted at all.
pub const SENTINEL_LABEL: i64 = -1;

/// Status text paired with [`SENTINEL_LABEL`].
pub const CONFIGURATION_ERROR_STATUS: &str = "Configuration Error";

const NOT_AVAILABLE: &str = "N/A";

/// Classification returned by the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    /// Human readable status, e.g. "Normal"
    pub predicted_status: String,
    /// Numeric class label
    pub predicted_label: i64,
    /// Per-class probabilities, when the model exposes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub prediction_probabilities: Option<Probabilities>,
}

impl PredictionResult {
    /// Result shown when the dashboard has no usable endpoint.
    pub fn configuration_error() -> Self {
        Self {
            predicted_status: CONFIGURATION_ERROR_STATUS.to_string(),
            predicted_label: SENTINEL_LABEL,
            prediction_probabilities: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.predicted_label == SENTINEL_LABEL
    }

    pub fn failure_class(&self) -> Option<FailureClass> {
        FailureClass::from_label(self.predicted_label)
    }

    /// Probabilities worth showing: present and not the `"N/A"` marker.
    pub fn probabilities(&self) -> Option<&[f64]> {
        self.prediction_probabilities
            .as_ref()
            .and_then(Probabilities::values)
    }
}

/// `prediction_probabilities` is either a list of numbers or the literal `"N/A"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Probabilities {
    Values(Vec<f64>),
    NotAvailable,
}

impl Probabilities {
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Probabilities::Values(values) => Some(values),
            Probabilities::NotAvailable => None,
        }
    }
}

impl Serialize for Probabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Probabilities::Values(values) => values.serialize(serializer),
            Probabilities::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProbabilitiesRepr {
    Values(Vec<f64>),
    Marker(String),
}

impl<'de> Deserialize<'de> for Probabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ProbabilitiesRepr::deserialize(deserializer)? {
            ProbabilitiesRepr::Values(values) => Ok(Probabilities::Values(values)),
            ProbabilitiesRepr::Marker(marker) if marker == NOT_AVAILABLE => {
                Ok(Probabilities::NotAvailable)
            }
            ProbabilitiesRepr::Marker(marker) => Err(D::Error::custom(format!(
                "unexpected prediction_probabilities value `{}`",
                marker
            ))),
        }
    }
}

/// Error body returned by the endpoint on non-success statuses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Classes the failure model distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    Normal,
    GearboxOverheating,
    Vibration,
}

impl FailureClass {
    pub const ALL: [FailureClass; 3] = [
        FailureClass::Normal,
        FailureClass::GearboxOverheating,
        FailureClass::Vibration,
    ];

    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(FailureClass::Normal),
            1 => Some(FailureClass::GearboxOverheating),
            2 => Some(FailureClass::Vibration),
            _ => None,
        }
    }

    pub fn label(self) -> u8 {
        match self {
            FailureClass::Normal => 0,
            FailureClass::GearboxOverheating => 1,
            FailureClass::Vibration => 2,
        }
    }

    /// Short caption used next to a probability.
    pub fn caption(self) -> &'static str {
        match self {
            FailureClass::Normal => "Normal",
            FailureClass::GearboxOverheating => "Gearbox failure",
            FailureClass::Vibration => "Vibration failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_success_body() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"predicted_status": "Normal", "predicted_label": 0}"#).unwrap();
        assert_eq!(result.predicted_label, 0);
        assert_eq!(result.prediction_probabilities, None);
        assert_eq!(result.failure_class(), Some(FailureClass::Normal));
    }

    #[test]
    fn test_probabilities_list_and_marker() {
        let with_values: PredictionResult = serde_json::from_str(
            r#"{"predicted_status": "Vibration failure", "predicted_label": 2, "prediction_probabilities": [0.1, 0.2, 0.7]}"#,
        )
        .unwrap();
        assert_eq!(with_values.probabilities(), Some(&[0.1, 0.2, 0.7][..]));

        let marker: PredictionResult = serde_json::from_str(
            r#"{"predicted_status": "Normal", "predicted_label": 0, "prediction_probabilities": "N/A"}"#,
        )
        .unwrap();
        assert_eq!(marker.prediction_probabilities, Some(Probabilities::NotAvailable));
        assert_eq!(marker.probabilities(), None);
    }

    #[test]
    fn test_schema_mismatch_is_an_error() {
        let missing_label: Result<PredictionResult, _> =
            serde_json::from_str(r#"{"predicted_status": "Normal"}"#);
        assert!(missing_label.is_err());

        let bad_marker: Result<PredictionResult, _> = serde_json::from_str(
            r#"{"predicted_status": "Normal", "predicted_label": 0, "prediction_probabilities": "unknown"}"#,
        );
        assert!(bad_marker.is_err());
    }

    #[test]
    fn test_configuration_error_sentinel() {
        let result = PredictionResult::configuration_error();
        assert!(result.is_sentinel());
        assert_eq!(result.predicted_status, "Configuration Error");
        assert_eq!(result.failure_class(), None);
    }

    #[test]
    fn test_error_body_is_optional() {
        let body: PredictionErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
    }
}

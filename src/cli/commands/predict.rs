use anyhow::{Context, Result};
use common::{FeatureCatalog, FeatureVector, PredictionResult};
use dashboard::{PredictionClient, probability_summary};
use std::path::Path;
use tracing::{debug, error, info, trace};

use crate::config::AppConfig;
use crate::transport::UreqTransport;

/// Post one feature vector to the prediction endpoint and print the result.
///
/// The endpoint comes from `--endpoint` or the configuration; features come
/// from `input` or the catalog defaults. Any failure is returned as an error.
pub async fn predict(input: Option<&Path>, endpoint: Option<String>) -> Result<PredictionResult> {
    trace!("Entering predict function");
    let config = AppConfig::load()?;
    let endpoint = endpoint.or(config.prediction_endpoint.clone());

    let features = match input {
        Some(path) => read_features(path)?,
        None => {
            let catalog: FeatureCatalog = config.feature_catalog()?;
            debug!("Using {} catalog defaults", catalog.len());
            catalog.defaults()
        }
    };

    let client = PredictionClient::new(endpoint, UreqTransport::new());
    match client.predict(&features).await {
        Ok(result) => {
            info!("Prediction succeeded");
            println!("Status: {}", result.predicted_status);
            println!("Label: {}", result.predicted_label);
            if let Some(probabilities) = result.probabilities() {
                println!("Probabilities: {}", probability_summary(probabilities));
            }
            Ok(result)
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            Err(e.into())
        }
    }
}

fn read_features(path: &Path) -> Result<FeatureVector> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let features: FeatureVector = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON object of feature values", path.display()))?;
    debug!("Read {} features from {}", features.len(), path.display());
    Ok(features)
}

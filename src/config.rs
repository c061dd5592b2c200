use anyhow::{Context, Result};
use common::FeatureCatalog;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::schemas::AppState;

/// Name of the optional configuration file, looked up without extension.
const CONFIG_FILE: &str = "windwatch";

/// Prefix of the environment variables that override the file.
const ENV_PREFIX: &str = "WINDWATCH";

/// Runtime configuration for the server and the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Prediction service URL handed to the dashboard
    pub prediction_endpoint: Option<String>,
    /// JSON array of feature names the model was trained on
    pub model_columns_path: Option<PathBuf>,
    /// Directory holding the built frontend bundle
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            prediction_endpoint: None,
            model_columns_path: None,
            static_dir: PathBuf::from("workspace/frontend/dist"),
        }
    }
}

impl AppConfig {
    /// Load `.env`, then `windwatch.toml` (optional), then `WINDWATCH_*` variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Feature catalog for the dashboard form.
    ///
    /// Falls back to the built-in catalog when no column file is configured.
    pub fn feature_catalog(&self) -> Result<FeatureCatalog> {
        match &self.model_columns_path {
            Some(path) => load_model_columns(path),
            None => Ok(FeatureCatalog::builtin()),
        }
    }
}

/// Read a `model_columns.json` style array of feature names.
pub fn load_model_columns(path: &Path) -> Result<FeatureCatalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model columns from {}", path.display()))?;
    let columns: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of column names", path.display()))?;
    tracing::info!("Loaded {} model columns from {}", columns.len(), path.display());
    Ok(FeatureCatalog::from_columns(columns))
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: AppConfig) -> Result<AppState> {
    let catalog = config.feature_catalog()?;
    if config.prediction_endpoint.is_none() {
        tracing::warn!("No prediction endpoint configured; the dashboard will report a configuration error");
    }
    Ok(AppState {
        config: Arc::new(config),
        catalog: Arc::new(catalog),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_builtin() {
        let catalog = AppConfig::default().feature_catalog().unwrap();
        assert_eq!(catalog, FeatureCatalog::builtin());
    }

    #[test]
    fn test_model_columns_override_catalog() {
        let path = std::env::temp_dir().join(format!("windwatch_columns_{}.json", std::process::id()));
        std::fs::write(&path, r#"["gearbox_temperature_c_max", "custom_feature"]"#).unwrap();

        let config = AppConfig {
            model_columns_path: Some(path.clone()),
            ..AppConfig::default()
        };
        let catalog = config.feature_catalog().unwrap();
        std::fs::remove_file(&path).ok();

        let names: Vec<&str> = catalog.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["gearbox_temperature_c_max", "custom_feature"]);
        assert_eq!(catalog.get("custom_feature").map(|f| f.default), Some(0.0));
    }

    #[test]
    fn test_missing_model_columns_is_an_error() {
        let config = AppConfig {
            model_columns_path: Some(PathBuf::from("/nonexistent/model_columns.json")),
            ..AppConfig::default()
        };
        assert!(initialize_app_state(config).is_err());
    }
}

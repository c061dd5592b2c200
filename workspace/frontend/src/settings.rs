use log::Level;
use web_sys::window;

const ENDPOINT_KEY: &str = "windwatch_prediction_endpoint";
const LOG_LEVEL_KEY: &str = "windwatch_log_level";
const API_BASE_KEY: &str = "windwatch_api_base_url";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the windwatch API (e.g., "http://localhost:3000/api/v1")
    pub api_base_url: String,

    /// Prediction endpoint set in this browser; wins over the server's value
    pub prediction_endpoint: Option<String>,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "/api/v1".to_string(),
            prediction_endpoint: None,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        let location = window.location();
        if let Ok(hostname) = location.hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }
        if let Ok(origin) = location.origin() {
            settings.api_base_url = format!("{}/api/v1", origin);
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_base_url)) = storage.get_item(API_BASE_KEY) {
                settings.api_base_url = api_base_url;
            }

            if let Ok(Some(endpoint)) = storage.get_item(ENDPOINT_KEY) {
                if !endpoint.trim().is_empty() {
                    settings.prediction_endpoint = Some(endpoint);
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
pub mod test_utils {
    use crate::config::{initialize_app_state, AppConfig};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_ENDPOINT: &str = "https://api.example.com/predict";

    /// Create AppState for testing with a configured endpoint and the built-in catalog
    pub fn setup_test_app_state() -> AppState {
        let config = AppConfig {
            prediction_endpoint: Some(TEST_ENDPOINT.to_string()),
            ..AppConfig::default()
        };
        initialize_app_state(config).expect("Failed to build test state")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _guard = init_test_tracing();
        create_router(setup_test_app_state())
    }

    /// Create axum app for testing from a custom state
    pub fn setup_test_app_with(state: AppState) -> Router {
        let _guard = init_test_tracing();
        create_router(state)
    }
}

#[cfg(test)]
mod integration_tests {
    use crate::config::{initialize_app_state, AppConfig};
    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_with, TEST_ENDPOINT};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ApiResponse, FeatureWindow, FrontendSettings};
    use serde_json::{json, Value};

    fn readings(count: usize, anomalous_at: Option<usize>) -> Vec<Value> {
        (0..count)
            .map(|i| {
                json!({
                    "timestamp": format!("2024-03-01T10:{:02}:00", i),
                    "wind_speed_m_s": 7.0 + i as f64,
                    "rotation_speed_rpm": 15.0,
                    "gearbox_temperature_c": 60.0,
                    "generator_power_kw": 1500.0,
                    "vibration_x_g": 0.1,
                    "vibration_y_g": 0.1,
                    "label": if Some(i) == anomalous_at { 1 } else { 0 }
                })
            })
            .collect()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_settings_expose_endpoint_and_catalog() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/settings").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<FrontendSettings> = response.json();
        assert!(body.success);
        assert_eq!(body.data.prediction_endpoint.as_deref(), Some(TEST_ENDPOINT));
        assert_eq!(body.data.feature_fields.len(), 30);
        assert_eq!(body.data.feature_fields[0].name, "gearbox_temperature_c_mean");
        assert_eq!(body.data.feature_fields[0].default, 75.0);
    }

    #[tokio::test]
    async fn test_settings_without_endpoint() {
        let state = initialize_app_state(AppConfig::default()).unwrap();
        let server = TestServer::new(setup_test_app_with(state)).unwrap();

        let response = server.get("/api/v1/settings").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<FrontendSettings> = response.json();
        assert_eq!(body.data.prediction_endpoint, None);
    }

    #[tokio::test]
    async fn test_feature_windows() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .post("/api/v1/features/windows")
            .json(&json!({
                "turbine_id": "turbine_7",
                "window_size": 5,
                "step": 5,
                "readings": readings(12, Some(7)),
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<FeatureWindow>> = response.json();
        assert!(body.success);
        assert_eq!(body.data.len(), 2);

        let first = &body.data[0];
        assert_eq!(first.turbine_id, "turbine_7");
        assert_eq!(first.label, 0);
        assert_eq!(first.features.get("wind_speed_m_s_mean"), Some(9.0));
        assert_eq!(first.features.get("wind_speed_m_s_min"), Some(7.0));
        assert_eq!(first.features.get("wind_speed_m_s_max"), Some(11.0));
        assert_eq!(first.features.len(), 30);

        // Readings 5..10 include the anomalous one
        assert_eq!(body.data[1].label, 1);
    }

    #[tokio::test]
    async fn test_feature_windows_defaults() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .post("/api/v1/features/windows")
            .json(&json!({ "readings": readings(20, None) }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<FeatureWindow>> = response.json();
        // (20 - 10) / 5 + 1
        assert_eq!(body.data.len(), 3);
        assert!(body.data.iter().all(|w| w.turbine_id == "unknown_turbine"));
    }

    #[tokio::test]
    async fn test_feature_windows_too_few_readings() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .post("/api/v1/features/windows")
            .json(&json!({ "readings": readings(3, None) }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<FeatureWindow>> = response.json();
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn test_feature_windows_rejects_invalid_window_size() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .post("/api/v1/features/windows")
            .json(&json!({ "window_size": 0, "readings": readings(12, None) }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert!(body.error.contains("window_size"));
    }

    #[tokio::test]
    async fn test_feature_windows_rejects_oversized_step() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .post("/api/v1/features/windows")
            .json(&json!({ "step": 10001, "readings": readings(12, None) }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert!(body.error.contains("step"));
    }

    #[tokio::test]
    async fn test_feature_windows_rejects_malformed_reading() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .post("/api/v1/features/windows")
            .json(&json!({ "readings": [{ "timestamp": "bad" }] }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_feature_windows_accept_space_separated_timestamps() {
        let server = TestServer::new(setup_test_app()).unwrap();
        let readings: Vec<Value> = readings(10, None)
            .into_iter()
            .enumerate()
            .map(|(i, mut reading)| {
                reading["timestamp"] = json!(format!("2025-05-13 10:{:02}:00.123456", i));
                reading
            })
            .collect();

        let response = server
            .post("/api/v1/features/windows")
            .json(&json!({ "readings": readings }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<FeatureWindow>> = response.json();
        assert_eq!(body.data.len(), 1);
        assert_eq!(
            body.data[0].window_end_timestamp.to_string(),
            "2025-05-13 10:09:00.123456"
        );
    }

    #[tokio::test]
    async fn test_openapi_lists_routes() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let spec: Value = response.json();
        let paths = &spec["paths"];
        assert!(paths.get("/health").is_some());
        assert!(paths.get("/api/v1/settings").is_some());
        assert!(paths.get("/api/v1/features/windows").is_some());
    }

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse {
            error: "Invalid window configuration: step must be at least 1".to_string(),
            code: "INVALID_WINDOW".to_string(),
            success: false,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["code"], "INVALID_WINDOW");
    }
}

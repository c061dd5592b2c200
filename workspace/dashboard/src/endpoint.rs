/// Value shipped in example configuration files until a real endpoint is set.
pub const PLACEHOLDER_ENDPOINT: &str = "YOUR_API_GATEWAY_ENDPOINT_HERE/predict";

const PLACEHOLDER_MARKER: &str = "YOUR_API_GATEWAY_ENDPOINT_HERE";

/// The endpoint to call, or `None` when it is unset, blank or still the placeholder.
pub fn configured_endpoint(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|endpoint| !endpoint.is_empty() && !endpoint.contains(PLACEHOLDER_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusable_endpoints() {
        assert_eq!(configured_endpoint(None), None);
        assert_eq!(configured_endpoint(Some("")), None);
        assert_eq!(configured_endpoint(Some("   ")), None);
        assert_eq!(configured_endpoint(Some(PLACEHOLDER_ENDPOINT)), None);
        assert_eq!(
            configured_endpoint(Some("https://YOUR_API_GATEWAY_ENDPOINT_HERE/prod/predict")),
            None
        );
    }

    #[test]
    fn test_configured_endpoint_is_trimmed() {
        assert_eq!(
            configured_endpoint(Some(" https://api.example.com/predict ")),
            Some("https://api.example.com/predict")
        );
    }
}

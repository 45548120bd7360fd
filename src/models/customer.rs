use serde::Deserialize;

/// Public keys handed out by Torque always carry this prefix.
pub const PUBLIC_KEY_PREFIX: &str = "pk_";

/// Test-mode keys additionally carry this prefix; they flip the hosted pages
/// into sandbox data via the `use_test_data` query flag.
pub const TEST_KEY_PREFIX: &str = "pk_test_";

/// Immutable per-customer configuration, captured once at facade construction
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CustomerConfig {
    pub customer_handle: String,
    pub api_public_key: String,
    pub auth_callback_url: Option<String>,
    pub fallback_url: Option<String>,
}

impl CustomerConfig {
    /// Whether the configured key is a sandbox key.
    pub fn is_test_key(&self) -> bool {
        self.api_public_key.starts_with(TEST_KEY_PREFIX)
    }
}

/// Response body of `GET /configuration`.
#[derive(Deserialize, Debug, Clone)]
pub struct CustomerConfigResponse {
    pub customer_config: CustomerConfigData,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CustomerConfigData {
    pub customer_handle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> CustomerConfig {
        CustomerConfig {
            customer_handle: "acme".to_string(),
            api_public_key: key.to_string(),
            auth_callback_url: None,
            fallback_url: None,
        }
    }

    #[test]
    fn test_test_key_detection() {
        assert!(config_with_key("pk_test_abc").is_test_key());
        assert!(!config_with_key("pk_live_abc").is_test_key());
        assert!(!config_with_key("pk_abc").is_test_key());
    }

    #[test]
    fn test_configuration_response_shape() {
        let raw = r#"{"customer_config": {"customer_handle": "acme"}}"#;
        let response: CustomerConfigResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.customer_config.customer_handle, "acme");
    }
}

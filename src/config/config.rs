use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::store::StoreConfig;
use crate::torque::error::TorqueError;

const CONFIG_FILE: &str = "./torque.yaml";

fn default_api_url() -> String {
    "https://api.torque.cloud".to_string()
}

fn default_web_app_url() -> String {
    "https://app.torque.cloud".to_string()
}

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// SDK config for v1.0.0: endpoint overrides, store backend and logging.
/// Every field has a sensible default; hosts only configure what they
/// deviate on.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    /// Base URL of the Torque API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base URL of the hosted web app (login/registration pages).
    #[serde(default = "default_web_app_url")]
    pub web_app_url: String,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            api_url: default_api_url(),
            web_app_url: default_web_app_url(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Load config from "torque.yaml" in the current directory merged with
/// `TORQUE_`-prefixed environment variables. Both sources are optional;
/// defaults fill whatever they leave out.
pub fn load_config() -> Result<ConfigV1, TorqueError> {
    extract_config(
        Figment::from(Serialized::defaults(Config::ConfigV1(ConfigV1::default())))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Env::prefixed("TORQUE_").split("__")),
    )
}

pub(crate) fn extract_config(figment: Figment) -> Result<ConfigV1, TorqueError> {
    match figment.extract::<Config>() {
        Ok(Config::ConfigV1(config)) => Ok(config),
        Err(e) => Err(TorqueError::InvalidConfig(format!(
            "Error loading configuration: {}",
            e
        ))),
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;

    const TEST_CONFIG: &str = r#"
version: "1.0.0"
api_url: "https://api.example.test"
store:
  enabled: true
  type: "memory"
logging:
  level: "debug"
  format: "json"
"#;

    #[test]
    fn test_defaults_apply_without_sources() {
        let config = extract_config(Figment::from(Serialized::defaults(Config::ConfigV1(
            ConfigV1::default(),
        ))))
        .unwrap();
        assert_eq!(config.api_url, "https://api.torque.cloud");
        assert!(config.store.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_yaml_fills_and_overrides() {
        let config = extract_config(Figment::from(Yaml::string(TEST_CONFIG))).unwrap();
        assert_eq!(config.api_url, "https://api.example.test");
        // Keys the file leaves out fall back to their defaults.
        assert_eq!(config.web_app_url, "https://app.torque.cloud");
        assert_eq!(config.logging.format, "json");
        assert!(matches!(config.store.backend, Some(StoreBackend::Memory)));
    }

    #[test]
    fn test_unknown_version_is_invalid_config() {
        let err =
            extract_config(Figment::from(Yaml::string("version: \"9.9.9\""))).unwrap_err();
        assert!(err.is_invalid_config());
    }
}

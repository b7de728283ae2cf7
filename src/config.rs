//! Configuration types for sona-desk

use crate::auth::OperatorCredential;
use crate::rates::RateSourceConfig;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub shop: ShopConfig,
    #[serde(default)]
    pub rates: RateSourceConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Shop identity, printed on every quote
#[derive(Debug, Clone, Deserialize)]
pub struct ShopConfig {
    pub name: String,
}

/// Pricing defaults
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// GST percentage applied when the operator does not give one
    #[serde(default = "default_gst_percent")]
    pub default_gst_percent: f64,
}

fn default_gst_percent() -> f64 {
    3.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_gst_percent: default_gst_percent(),
        }
    }
}

/// Access gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Where the signed-in operator marker lives
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,
    /// Registered operators
    #[serde(default)]
    pub operators: Vec<OperatorCredential>,
}

fn default_session_path() -> PathBuf {
    PathBuf::from("session.json")
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
            operators: Vec::new(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [shop]
            name = "Sona Jewellers"

            [rates]
            source_url = "https://kjpl.in/"
            marker = "MJDTA RATE (With GST)"
            timeout_secs = 10

            [pricing]
            default_gst_percent = 3.0

            [auth]
            session_path = "session.json"

            [[auth.operators]]
            email = "owner@example.com"
            password = "change-me"

            [telemetry]
            log_level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.shop.name, "Sona Jewellers");
        assert_eq!(config.rates.timeout_secs, 10);
        assert_eq!(config.auth.operators.len(), 1);
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str("[shop]\nname = \"Sona Jewellers\"").unwrap();
        assert_eq!(config.rates.source_url, "https://kjpl.in/");
        assert_eq!(config.pricing.default_gst_percent, 3.0);
        assert!(config.auth.operators.is_empty());
        assert_eq!(config.auth.session_path, PathBuf::from("session.json"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }
}

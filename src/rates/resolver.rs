//! Rate resolver
//!
//! Walks the relay chain in order, takes the first non-empty payload,
//! and extracts the rate snapshot from it. Never fatal to the caller:
//! every failure mode keeps the previous snapshot.

use super::{extract_rates, RateSnapshot, RelayStrategy};
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Rate source URL used when none is configured
pub const DEFAULT_SOURCE_URL: &str = "https://kjpl.in/";

/// Rate resolution errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Every relay in the chain failed to return a payload
    #[error("all relay strategies failed")]
    AllRelaysFailed,
    /// A payload was fetched but no usable rates were found in it
    #[error("rate figures not found in fetched page")]
    RatesNotFound,
}

/// Configuration for the rate source and its scraping labels
#[derive(Debug, Clone, Deserialize)]
pub struct RateSourceConfig {
    /// Third-party rate-publishing page
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Text marking the section the rates live in
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Row label for the gold figure
    #[serde(default = "default_gold_label")]
    pub gold_label: String,
    /// Row label for the silver figure
    #[serde(default = "default_silver_label")]
    pub silver_label: String,
    /// Per-attempt timeout; when it elapses the next relay is tried
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Where the CLI persists the last good snapshot
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}
fn default_marker() -> String {
    "MJDTA RATE (With GST)".to_string()
}
fn default_gold_label() -> String {
    "GOLD:".to_string()
}
fn default_silver_label() -> String {
    "SILVER:".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_cache_path() -> PathBuf {
    PathBuf::from("rates-cache.json")
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            marker: default_marker(),
            gold_label: default_gold_label(),
            silver_label: default_silver_label(),
            timeout_secs: default_timeout_secs(),
            cache_path: default_cache_path(),
        }
    }
}

/// JSON envelope returned by contents-wrapping relays
#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    contents: Option<String>,
}

/// Client for the relay fallback chain
pub struct RateResolver {
    config: RateSourceConfig,
    relays: Vec<RelayStrategy>,
    client: Client,
}

impl RateResolver {
    /// Create a resolver using the built-in relay chain
    pub fn new(config: RateSourceConfig) -> Self {
        Self::with_relays(config, RelayStrategy::defaults())
    }

    /// Create a resolver with a custom relay chain
    pub fn with_relays(config: RateSourceConfig, relays: Vec<RelayStrategy>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            relays,
            client,
        }
    }

    /// One attempt through a single relay
    async fn fetch_via(&self, relay: &RelayStrategy) -> anyhow::Result<String> {
        let url = relay.wrap(&self.config.source_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("relay returned status {}", response.status());
        }

        let payload = match relay.envelope {
            super::Envelope::JsonContents => {
                let envelope: RelayEnvelope = response.json().await?;
                envelope.contents.unwrap_or_default()
            }
            super::Envelope::RawBody => response.text().await?,
        };

        if payload.trim().is_empty() {
            anyhow::bail!("relay returned empty payload");
        }

        Ok(payload)
    }

    /// Fetch the rate page and extract a snapshot.
    ///
    /// Relays are tried strictly in order; the first non-empty payload
    /// wins and the rest are never contacted. Extraction failure on the
    /// winning payload fails the whole resolution rather than falling
    /// back further.
    pub async fn resolve(&self) -> Result<RateSnapshot, ResolveError> {
        let mut page = None;

        for relay in &self.relays {
            tracing::debug!(relay = %relay.name, "attempting rate fetch");
            match self.fetch_via(relay).await {
                Ok(payload) => {
                    tracing::info!(relay = %relay.name, bytes = payload.len(), "fetched rate page");
                    page = Some(payload);
                    break;
                }
                Err(e) => {
                    tracing::warn!(relay = %relay.name, error = %e, "relay attempt failed");
                }
            }
        }

        let page = page.ok_or(ResolveError::AllRelaysFailed)?;

        let snapshot = extract_rates(&page, &self.config).ok_or(ResolveError::RatesNotFound)?;
        tracing::info!(
            gold_22k = snapshot.gold_22k,
            silver = snapshot.silver,
            "rates updated"
        );
        Ok(snapshot)
    }

    /// Resolve and assign into `snapshot`, only on success.
    ///
    /// On any error the snapshot is exactly what it was before the call.
    pub async fn refresh(&self, snapshot: &mut RateSnapshot) -> Result<(), ResolveError> {
        *snapshot = self.resolve().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RateSourceConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.gold_label, "GOLD:");
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: RateSourceConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.marker, "MJDTA RATE (With GST)");
    }

    #[test]
    fn test_resolver_creation() {
        let resolver = RateResolver::new(RateSourceConfig::default());
        assert_eq!(resolver.relays.len(), 3);
    }

    #[test]
    fn test_envelope_missing_contents() {
        let envelope: RelayEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.contents.is_none());
    }
}

//! Relay strategies
//!
//! A relay is a public CORS proxy that hands back a third-party page the
//! estimator cannot reach directly. Each strategy knows how to wrap the
//! target URL and how its response body carries the page text.

/// How a relay's response body carries the fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// Body is a JSON object whose `contents` field holds the page text
    JsonContents,
    /// Body is the page text itself
    RawBody,
}

/// A named request-wrapping scheme, tried in declaration order
#[derive(Debug, Clone)]
pub struct RelayStrategy {
    /// Human-readable name, used in diagnostics only
    pub name: String,
    /// Prefix the percent-encoded target URL is appended to
    pub base: String,
    /// How to unwrap the response body
    pub envelope: Envelope,
}

impl RelayStrategy {
    pub fn new(name: impl Into<String>, base: impl Into<String>, envelope: Envelope) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            envelope,
        }
    }

    /// The built-in relay chain, in the order attempts are made
    pub fn defaults() -> Vec<RelayStrategy> {
        vec![
            RelayStrategy::new(
                "AllOrigins",
                "https://api.allorigins.win/get?url=",
                Envelope::JsonContents,
            ),
            RelayStrategy::new(
                "CodeTabs",
                "https://api.codetabs.com/v1/proxy?quest=",
                Envelope::RawBody,
            ),
            RelayStrategy::new("CorsProxy", "https://corsproxy.io/?", Envelope::RawBody),
        ]
    }

    /// Wrapped URL for a target page
    pub fn wrap(&self, target: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
        format!("{}{}", self.base, encoded)
    }
}

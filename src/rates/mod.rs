//! Market rate resolution
//!
//! Fetches the third-party rate-publishing page through an ordered
//! fallback chain of public CORS relays and pattern-matches the gold and
//! silver figures out of it. Resolution fails closed: on any error the
//! previously known snapshot is kept and the operator can type rates in
//! by hand.

mod cache;
mod extract;
mod relay;
mod resolver;

pub use cache::SnapshotStore;
pub use extract::extract_rates;
pub use relay::{Envelope, RelayStrategy};
pub use resolver::{RateResolver, RateSourceConfig, ResolveError};

use crate::pricing::Purity;
use serde::{Deserialize, Serialize};

/// Last known per-purity market rates; last successful fetch wins
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// 22-karat gold rate per gram
    #[serde(rename = "22k")]
    pub gold_22k: f64,
    /// Silver rate per gram
    pub silver: f64,
}

impl RateSnapshot {
    /// Rate for the given purity grade
    pub fn rate_for(&self, purity: Purity) -> f64 {
        match purity {
            Purity::Gold22k => self.gold_22k,
            Purity::Silver => self.silver,
        }
    }

    /// True when no usable rate has been seen yet
    pub fn is_empty(&self) -> bool {
        self.gold_22k <= 0.0 && self.silver <= 0.0
    }
}

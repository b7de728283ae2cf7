//! Rates command
//!
//! The cached snapshot can be refreshed from the configured source or
//! overwritten by hand when the scrape is down or wrong.

use crate::config::Config;
use crate::input;
use crate::rates::{RateResolver, SnapshotStore};
use clap::Args;

#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Fetch fresh rates from the configured source
    #[arg(long)]
    pub refresh: bool,

    /// Set the gold rate by hand
    #[arg(long)]
    pub gold: Option<String>,

    /// Set the silver rate by hand
    #[arg(long)]
    pub silver: Option<String>,
}

impl RatesArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = SnapshotStore::new(&config.rates.cache_path);
        let mut snapshot = store.load();

        if self.refresh {
            let resolver = RateResolver::new(config.rates.clone());
            match resolver.refresh(&mut snapshot).await {
                Ok(()) => store.save(&snapshot)?,
                Err(e) => {
                    tracing::warn!(error = %e, "rate refresh failed, keeping previous rates");
                }
            }
        }

        if self.gold.is_some() || self.silver.is_some() {
            if let Some(text) = &self.gold {
                snapshot.gold_22k = input::sanitize_non_negative(text);
            }
            if let Some(text) = &self.silver {
                snapshot.silver = input::sanitize_non_negative(text);
            }
            store.save(&snapshot)?;
        }

        println!("GOLD 22K: ₹{}/g", snapshot.gold_22k);
        println!("SILVER:   ₹{}/g", snapshot.silver);
        Ok(())
    }
}

//! Quote command
//!
//! Numeric flags are taken as free-form text and run through the input
//! sanitizer, so junk silently becomes zero the same way an empty form
//! field would.

use crate::auth::SessionStore;
use crate::config::Config;
use crate::input;
use crate::pricing::{self, PricingInput, Purity};
use crate::quote;
use crate::rates::{RateResolver, SnapshotStore};
use clap::Args;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// New metal weight in grams
    #[arg(long)]
    pub weight: Option<String>,

    /// Purity grade
    #[arg(long, value_enum, default_value = "22k")]
    pub purity: Purity,

    /// Per-gram rate; defaults to the cached market rate
    #[arg(long)]
    pub rate: Option<String>,

    /// Per-gram offer subtracted from the rate
    #[arg(long)]
    pub discount: Option<String>,

    /// Flat making charge
    #[arg(long)]
    pub making: Option<String>,

    /// Stone price
    #[arg(long)]
    pub stone: Option<String>,

    /// GST percentage; defaults from configuration
    #[arg(long)]
    pub gst: Option<String>,

    /// Old metal trade-in weight in grams
    #[arg(long)]
    pub old_weight: Option<String>,

    /// Old metal touch percentage
    #[arg(long)]
    pub old_touch: Option<String>,

    /// Old metal per-gram rate
    #[arg(long)]
    pub old_rate: Option<String>,

    /// Also print the WhatsApp share link
    #[arg(long)]
    pub share: bool,
}

impl QuoteArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let sessions = SessionStore::new(&config.auth.session_path);
        let session = match sessions.load() {
            Some(session) => session,
            None => anyhow::bail!("No active session. Run `sona-desk login` first."),
        };
        tracing::debug!(operator = %session.operator_email, "building estimate");

        let rate_per_gram = self.resolve_rate(config).await;

        let field = |text: &Option<String>| {
            text.as_deref().map(input::sanitize_non_negative).unwrap_or(0.0)
        };

        let pricing_input = PricingInput {
            weight: field(&self.weight),
            purity: self.purity,
            rate_per_gram,
            discount_per_gram: field(&self.discount),
            making_charge: field(&self.making),
            stone_charge: field(&self.stone),
            gst_percent: self
                .gst
                .as_deref()
                .map(input::sanitize_non_negative)
                .unwrap_or(config.pricing.default_gst_percent),
            old_metal_weight: field(&self.old_weight),
            // Touch is sanitized but not clamped: non-positive values
            // fall back to full weight inside the engine.
            old_metal_touch: self.old_touch.as_deref().map(input::sanitize).unwrap_or(0.0),
            old_metal_rate: field(&self.old_rate),
        };

        let result = pricing::compute(&pricing_input);
        let text = quote::format_quote(&config.shop.name, &pricing_input, &result);

        println!("{text}");
        if self.share {
            println!();
            println!("Share: {}", quote::share_link(&text));
        }

        Ok(())
    }

    /// Explicit --rate wins; otherwise the cached snapshot, topped up by
    /// an opportunistic resolver run when the cache is still empty.
    async fn resolve_rate(&self, config: &Config) -> f64 {
        if let Some(text) = &self.rate {
            return input::sanitize_non_negative(text);
        }

        let store = SnapshotStore::new(&config.rates.cache_path);
        let mut snapshot = store.load();

        if snapshot.is_empty() {
            let resolver = RateResolver::new(config.rates.clone());
            match resolver.refresh(&mut snapshot).await {
                Ok(()) => {
                    if let Err(e) = store.save(&snapshot) {
                        tracing::warn!(error = %e, "could not persist refreshed rates");
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rate resolution failed, pass --rate to quote");
                }
            }
        }

        snapshot.rate_for(self.purity)
    }
}

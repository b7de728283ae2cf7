//! Rate figure extraction
//!
//! The rate page is loosely structured HTML with no stable contract, so
//! parsing is a best-effort pattern match kept separate from the network
//! transport: find the table whose text carries the configured marker,
//! then pull the first numeric token after each metal label.

use super::{RateSnapshot, RateSourceConfig};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    static ref TABLE_BLOCK: Regex = block_pattern("table");
    static ref ROW_BLOCK: Regex = block_pattern("tr");
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    // Decimal with optional comma thousands separators, e.g. "7,245.50"
    static ref NUMBER: Regex = Regex::new(r"\d[\d,]*(?:\.\d+)?").unwrap();
}

fn block_pattern(tag: &str) -> Regex {
    RegexBuilder::new(&format!(r"<{tag}\b[^>]*>.*?</{tag}>"))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("valid block pattern")
}

/// Tag-stripped text content of an HTML fragment
fn visible_text(fragment: &str) -> String {
    TAG.replace_all(fragment, "")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// First numeric token following `label`, commas removed
fn number_after(text: &str, label: &str) -> Option<f64> {
    let idx = text.find(label)?;
    let tail = &text[idx + label.len()..];
    let token = NUMBER.find(tail)?;
    token.as_str().replace(',', "").parse::<f64>().ok()
}

/// Pull the gold and silver rates out of a fetched page.
///
/// Returns `None` unless a marker-labeled section yields a non-zero gold
/// figure; a missing silver figure rides along as zero. A `None` here
/// must never overwrite previously known rates.
pub fn extract_rates(raw: &str, config: &RateSourceConfig) -> Option<RateSnapshot> {
    for table in TABLE_BLOCK.find_iter(raw) {
        let table_text = visible_text(table.as_str());
        if !table_text.contains(&config.marker) {
            continue;
        }

        let mut gold = 0.0;
        let mut silver = 0.0;
        for row in ROW_BLOCK.find_iter(table.as_str()) {
            let row_text = visible_text(row.as_str());
            if row_text.contains(&config.gold_label) {
                if let Some(value) = number_after(&row_text, &config.gold_label) {
                    gold = value;
                }
            }
            if row_text.contains(&config.silver_label) {
                if let Some(value) = number_after(&row_text, &config.silver_label) {
                    silver = value;
                }
            }
        }

        if gold > 0.0 {
            return Some(RateSnapshot {
                gold_22k: gold,
                silver,
            });
        }
        tracing::debug!("marker section found but no usable gold figure");
    }

    None
}

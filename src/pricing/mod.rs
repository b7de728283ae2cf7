//! Pricing module
//!
//! Pure cost computation from a sanitized input record to a full
//! breakdown: metal, making, stones, GST, exchange deduction, net payable.

mod engine;

pub use engine::compute;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Metal purity grade, selects which configured rate applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Purity {
    /// 22-karat gold
    #[serde(rename = "22k")]
    #[value(name = "22k")]
    Gold22k,
    /// Sterling silver
    Silver,
}

impl std::fmt::Display for Purity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Purity::Gold22k => write!(f, "22K"),
            Purity::Silver => write!(f, "SILVER"),
        }
    }
}

/// One estimation request, rebuilt from operator input on every calculation
#[derive(Debug, Clone, PartialEq)]
pub struct PricingInput {
    /// New metal weight in grams
    pub weight: f64,
    /// Purity grade the rate applies to
    pub purity: Purity,
    /// Market rate per gram for the selected purity
    pub rate_per_gram: f64,
    /// Per-gram offer subtracted from the rate before multiplication
    pub discount_per_gram: f64,
    /// Flat fabrication fee, not scaled by weight
    pub making_charge: f64,
    /// Flat stone price
    pub stone_charge: f64,
    /// GST percentage applied to the metal+making+stone subtotal
    pub gst_percent: f64,
    /// Trade-in metal weight in grams
    pub old_metal_weight: f64,
    /// Trade-in fineness percentage; zero or absent counts full weight
    pub old_metal_touch: f64,
    /// Per-gram rate paid for the trade-in metal
    pub old_metal_rate: f64,
}

/// Computed breakdown, replaced wholesale by the next calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// weight x effective rate
    pub metal_cost: f64,
    /// Flat making fee, passed through
    pub making_cost: f64,
    /// Flat stone price, passed through
    pub stone_cost: f64,
    /// GST on the metal+making+stone subtotal
    pub gst_amount: f64,
    /// Subtotal plus GST
    pub total: f64,
    /// Trade-in credit
    pub exchange_value: f64,
    /// Total minus exchange value; negative means a refund is owed
    pub net_payable: f64,
    /// Informational per-quote discount, for display only
    pub discount_amount: f64,
    /// Trade-in weight after applying the touch percentage
    pub processed_old_weight: f64,
}

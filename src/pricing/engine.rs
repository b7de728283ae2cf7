//! Cost computation
//!
//! A single pure function over the input record. The engine is total:
//! every field is clamped non-negative on entry (except the trade-in
//! touch, whose non-positive values fall back to full weight), so no
//! input combination can make it fail.

use super::{PricingInput, PricingResult};
use crate::input::clamp_non_negative;

/// Compute the full price breakdown for one estimation request.
///
/// Currency stays in f64 end to end; rounding to whole rupees happens
/// only at the display boundary in the quote formatter.
pub fn compute(input: &PricingInput) -> PricingResult {
    let weight = clamp_non_negative(input.weight);
    let rate = clamp_non_negative(input.rate_per_gram);
    let discount = clamp_non_negative(input.discount_per_gram);
    let making = clamp_non_negative(input.making_charge);
    let stone = clamp_non_negative(input.stone_charge);
    let gst_fraction = clamp_non_negative(input.gst_percent) / 100.0;

    // A per-gram offer larger than the rate floors at zero, never negative.
    let effective_rate = clamp_non_negative(rate - discount);

    let metal_cost = weight * effective_rate;
    let subtotal = metal_cost + making + stone;
    let gst_amount = subtotal * gst_fraction;
    let total = subtotal + gst_amount;

    // Exchange leg. Touch of zero (or junk coerced to zero) means the
    // fineness was not given: count the full weight rather than valuing
    // the trade-in at nothing.
    let old_weight = clamp_non_negative(input.old_metal_weight);
    let old_rate = clamp_non_negative(input.old_metal_rate);
    let touch_factor = if input.old_metal_touch > 0.0 {
        input.old_metal_touch / 100.0
    } else {
        1.0
    };

    let processed_old_weight = old_weight * touch_factor;
    let exchange_value = processed_old_weight * old_rate;

    // Deliberately unclamped: a trade-in worth more than the new item
    // shows up as a negative, refund-owed amount.
    let net_payable = total - exchange_value;

    PricingResult {
        metal_cost,
        making_cost: making,
        stone_cost: stone,
        gst_amount,
        total,
        exchange_value,
        net_payable,
        discount_amount: discount * weight,
        processed_old_weight,
    }
}

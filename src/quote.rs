//! Shareable quote formatting
//!
//! Renders a computed breakdown plus the echoed inputs into the text
//! message handed to the share target. All currency rounding happens
//! here: headline totals round to whole rupees with Indian digit
//! grouping, breakdown lines keep two decimals, the processed trade-in
//! weight keeps three.

use crate::pricing::{PricingInput, PricingResult};
use std::fmt::Write;

/// Whole-rupee display with Indian digit grouping (12,34,567)
fn format_inr(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_indian(&digits);
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Group a digit string the Indian way: last three, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (next, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = next;
    }
    pairs.push(rest);
    pairs.reverse();
    format!("{},{}", pairs.join(","), tail)
}

/// Echo a number the way the operator typed it: up to three decimals,
/// trailing zeros trimmed
fn format_plain(value: f64) -> String {
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render the shareable quote text.
///
/// The old-metal exchange block appears only when the trade-in is worth
/// something, and the per-gram offer annotation only when a discount was
/// actually applied.
pub fn format_quote(shop_name: &str, input: &PricingInput, result: &PricingResult) -> String {
    let mut text = String::new();

    let _ = writeln!(text, "*✨ {shop_name} Estimate ✨*");
    let _ = writeln!(text, "-----------------------------");
    let _ = writeln!(text, "*Item Details:*");
    let _ = writeln!(
        text,
        "Weight: {}g ({})",
        format_plain(input.weight),
        input.purity
    );

    if result.discount_amount > 0.0 {
        let _ = writeln!(
            text,
            "Rate: ₹{}/g (Less -₹{}/g)",
            format_plain(input.rate_per_gram),
            format_plain(input.discount_per_gram)
        );
    } else {
        let _ = writeln!(text, "Rate: ₹{}/g", format_plain(input.rate_per_gram));
    }

    let _ = writeln!(
        text,
        "Making: ₹{} (Fixed)",
        format_plain(input.making_charge)
    );
    let _ = writeln!(text, "Stones: ₹{}", format_plain(input.stone_charge));
    let _ = writeln!(text);

    let _ = writeln!(text, "*Breakdown:*");
    let _ = writeln!(text, "Metal: ₹{:.2}", result.metal_cost);
    let _ = writeln!(text, "Making: ₹{:.2}", result.making_cost);
    let _ = writeln!(text, "Stones: ₹{:.2}", result.stone_cost);
    let _ = writeln!(
        text,
        "GST ({}%): ₹{:.2}",
        format_plain(input.gst_percent),
        result.gst_amount
    );
    let _ = writeln!(text);

    let _ = writeln!(text, "*New Item Total: ₹{}*", format_inr(result.total));

    if result.exchange_value > 0.0 {
        let _ = writeln!(text);
        let _ = writeln!(text, "*Old Metal Exchange:*");
        if input.old_metal_touch > 0.0 {
            let _ = writeln!(
                text,
                "Weight: {}g (@ {}%)",
                format_plain(input.old_metal_weight),
                format_plain(input.old_metal_touch)
            );
        } else {
            let _ = writeln!(text, "Weight: {}g", format_plain(input.old_metal_weight));
        }
        let _ = writeln!(text, "Net Weight: {:.3}g", result.processed_old_weight);
        let _ = writeln!(text, "Rate: ₹{}/g", format_plain(input.old_metal_rate));
        let _ = writeln!(text, "Less: -₹{}", format_inr(result.exchange_value));
        let _ = writeln!(text);
        let _ = writeln!(text, "*NET PAYABLE: ₹{}*", format_inr(result.net_payable));
    }

    let _ = writeln!(text, "-----------------------------");
    let _ = write!(text, "_Generated by {shop_name}_");

    text
}

/// Share-target URL carrying the pre-formatted quote text
pub fn share_link(text: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("https://wa.me/?text={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{compute, Purity};

    fn example_input() -> PricingInput {
        PricingInput {
            weight: 10.0,
            purity: Purity::Gold22k,
            rate_per_gram: 7000.0,
            discount_per_gram: 50.0,
            making_charge: 500.0,
            stone_charge: 0.0,
            gst_percent: 3.0,
            old_metal_weight: 0.0,
            old_metal_touch: 0.0,
            old_metal_rate: 0.0,
        }
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(123.0), "123");
        assert_eq!(format_inr(1234.0), "1,234");
        assert_eq!(format_inr(123456.0), "1,23,456");
        assert_eq!(format_inr(1234567.0), "12,34,567");
        assert_eq!(format_inr(72100.0), "72,100");
    }

    #[test]
    fn test_grouping_preserves_sign() {
        assert_eq!(format_inr(-42330.0), "-42,330");
        assert_eq!(format_inr(-0.4), "0");
    }

    #[test]
    fn test_totals_round_half_away_from_zero() {
        assert_eq!(format_inr(99.5), "100");
        assert_eq!(format_inr(-99.5), "-100");
    }

    #[test]
    fn test_format_plain_trims() {
        assert_eq!(format_plain(10.0), "10");
        assert_eq!(format_plain(4.58), "4.58");
        assert_eq!(format_plain(91.6), "91.6");
        assert_eq!(format_plain(0.0), "0");
    }

    #[test]
    fn test_quote_without_exchange() {
        let input = example_input();
        let result = compute(&input);
        let text = format_quote("Sona Jewellers", &input, &result);

        assert!(text.contains("*✨ Sona Jewellers Estimate ✨*"));
        assert!(text.contains("Weight: 10g (22K)"));
        assert!(text.contains("Rate: ₹7000/g (Less -₹50/g)"));
        assert!(text.contains("GST (3%): ₹2100.00"));
        assert!(text.contains("*New Item Total: ₹72,100*"));
        assert!(!text.contains("Old Metal Exchange"));
        assert!(!text.contains("NET PAYABLE"));
        assert!(text.ends_with("_Generated by Sona Jewellers_"));
    }

    #[test]
    fn test_quote_with_exchange() {
        let mut input = example_input();
        input.old_metal_weight = 5.0;
        input.old_metal_touch = 91.6;
        input.old_metal_rate = 6500.0;
        let result = compute(&input);
        let text = format_quote("Sona Jewellers", &input, &result);

        assert!(text.contains("*Old Metal Exchange:*"));
        assert!(text.contains("Weight: 5g (@ 91.6%)"));
        assert!(text.contains("Net Weight: 4.580g"));
        assert!(text.contains("Less: -₹29,770"));
        assert!(text.contains("*NET PAYABLE: ₹42,330*"));
    }

    #[test]
    fn test_quote_exchange_without_touch_annotation() {
        let mut input = example_input();
        input.old_metal_weight = 3.0;
        input.old_metal_rate = 6000.0;
        let result = compute(&input);
        let text = format_quote("Sona Jewellers", &input, &result);

        assert!(text.contains("Weight: 3g\n"));
        assert!(!text.contains("(@"));
    }

    #[test]
    fn test_no_discount_annotation_when_zero() {
        let mut input = example_input();
        input.discount_per_gram = 0.0;
        let result = compute(&input);
        let text = format_quote("Sona Jewellers", &input, &result);

        assert!(text.contains("Rate: ₹7000/g\n"));
        assert!(!text.contains("Less -₹"));
    }

    #[test]
    fn test_negative_net_payable_shown_as_is() {
        let mut input = example_input();
        input.weight = 1.0;
        input.old_metal_weight = 20.0;
        input.old_metal_rate = 6500.0;
        let result = compute(&input);
        let text = format_quote("Sona Jewellers", &input, &result);

        assert!(text.contains("*NET PAYABLE: ₹-"));
    }

    #[test]
    fn test_share_link_urlencodes() {
        let link = share_link("a b&c");
        assert!(link.starts_with("https://wa.me/?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains("&c"));
    }
}

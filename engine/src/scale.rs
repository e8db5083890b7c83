//! Quantity scaling: label nutrition to realized nutrition, and batch
//! recipes to per-serving and logged amounts.
//!
//! Everything here is pure. Inputs are normalised before use:
//! - amounts that are negative, non-finite or unparseable count as `0`,
//! - divisors (label weight, serving counts) that are `<= 0` or non-finite
//!   fall back to `1`, so a missing label weight scales as "per gram" rather
//!   than dividing by zero.

use crate::nutrition::Nutrition;
use crate::recipe::Ingredient;

/// Parse user-entered text as a non-negative quantity.
///
/// Takes the longest numeric prefix of the trimmed text, so `"12.5g"` reads
/// as `12.5`. Empty, non-numeric, negative and non-finite input yields `0`.
pub fn parse_quantity(text: &str) -> f64 {
    let text = text.trim();
    let numeric_len = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let candidate = &text[..numeric_len];

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .map(quantity_or_zero)
        .unwrap_or(0.0)
}

/// Parse user-entered text as a divisor (label weight, serving count).
pub fn parse_divisor(text: &str) -> f64 {
    guard_divisor(parse_quantity(text))
}

/// Map negative and non-finite quantities to `0`.
pub fn quantity_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Substitute `1` for a zero, negative or non-finite divisor.
pub fn guard_divisor(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Realized nutrition for `amount_used_grams` of a food whose label states
/// `label` per `label_weight_grams`.
///
/// Calories are rounded to an integer and macros to one decimal.
pub fn scale_ingredient(label: Nutrition, label_weight_grams: f64, amount_used_grams: f64) -> Nutrition {
    let weight = guard_divisor(label_weight_grams);
    let amount = quantity_or_zero(amount_used_grams);

    label
        .non_negative()
        .map(|v| v / weight)
        .scale(amount)
        .rounded_for_log()
}

/// Elementwise sum of the scaled ingredients. Empty input sums to zero.
pub fn sum_ingredients<'a>(ingredients: impl IntoIterator<Item = &'a Ingredient>) -> Nutrition {
    ingredients.into_iter().map(Ingredient::nutrition).sum()
}

/// Split batch totals into `serving_count` servings.
///
/// Every field, calories included, is rounded to one decimal. Logged meals
/// round calories to an integer instead; the two must not be conflated.
pub fn per_serving(batch: Nutrition, serving_count: f64) -> Nutrition {
    let servings = guard_divisor(serving_count);
    batch.map(|v| v / servings).rounded_per_serving()
}

/// Nutrition for eating `servings_to_log` servings, rounded like
/// [`per_serving`].
pub fn logged_amount(per_serving: Nutrition, servings_to_log: f64) -> Nutrition {
    per_serving
        .scale(guard_divisor(servings_to_log))
        .rounded_per_serving()
}

//! Calorie and macronutrient quantities.
//!
//! Rounding is always round-half-away-from-zero applied to the binary value
//! after scaling by the decimal factor (`f64::round`). A value such as `2.25`
//! is exactly representable and rounds to `2.3`; values that are not exactly
//! representable round according to their nearest binary approximation.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Round to the nearest integer, halves away from zero.
pub fn round0(value: f64) -> f64 {
    value.round()
}

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calories plus the three macronutrients, in kcal and grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrition {
    pub const ZERO: Nutrition = Nutrition {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Apply `f` to every field.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
        }
    }

    /// Multiply every field by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    /// Rounding used for logged meals and day totals: integer calories,
    /// one-decimal macros.
    pub fn rounded_for_log(self) -> Self {
        Self {
            calories: round0(self.calories),
            protein: round1(self.protein),
            carbs: round1(self.carbs),
            fat: round1(self.fat),
        }
    }

    /// Rounding used for per-serving figures: one decimal on every field,
    /// calories included.
    pub fn rounded_per_serving(self) -> Self {
        self.map(round1)
    }

    /// Clamp negative or non-finite fields to zero.
    pub fn non_negative(self) -> Self {
        self.map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Self {
        iter.fold(Nutrition::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Nutrition> for Nutrition {
    fn sum<I: Iterator<Item = &'a Nutrition>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

//! Built-in reference foods, with nutrition per 100 g.

use crate::meal::Meal;
use crate::nutrition::Nutrition;
use crate::scale;
use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// Catalogue grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    Protein,
    Carbs,
    Vegetables,
    Fats,
}

impl FoodCategory {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "protein" => Some(Self::Protein),
            "carbs" => Some(Self::Carbs),
            "vegetables" => Some(Self::Vegetables),
            "fats" => Some(Self::Fats),
            _ => None,
        }
    }
}

/// A catalogue entry. Nutrition values are per 100 g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: &'static str,
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub category: FoodCategory,
}

const fn food(
    id: &'static str,
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    category: FoodCategory,
) -> FoodItem {
    FoodItem {
        id,
        name,
        calories,
        protein,
        carbs,
        fat,
        category,
    }
}

use FoodCategory::*;

/// The reference table.
pub const FOODS: &[FoodItem] = &[
    food("1", "Chicken Breast", 165.0, 31.0, 0.0, 3.6, Protein),
    food("2", "Salmon", 208.0, 22.0, 0.0, 12.0, Protein),
    food("3", "Eggs", 155.0, 13.0, 1.1, 11.0, Protein),
    food("4", "Greek Yogurt", 59.0, 10.0, 3.6, 0.4, Protein),
    food("5", "Tofu", 76.0, 8.0, 1.9, 4.8, Protein),
    food("6", "Brown Rice", 111.0, 2.6, 23.0, 0.9, Carbs),
    food("7", "Quinoa", 120.0, 4.4, 22.0, 1.9, Carbs),
    food("8", "Sweet Potato", 86.0, 1.6, 20.0, 0.1, Carbs),
    food("9", "Oats", 389.0, 16.9, 66.0, 6.9, Carbs),
    food("10", "Whole Wheat Bread", 247.0, 13.0, 41.0, 4.2, Carbs),
    food("11", "Broccoli", 34.0, 2.8, 7.0, 0.4, Vegetables),
    food("12", "Spinach", 23.0, 2.9, 3.6, 0.4, Vegetables),
    food("13", "Bell Peppers", 31.0, 1.0, 7.0, 0.3, Vegetables),
    food("14", "Carrots", 41.0, 0.9, 10.0, 0.2, Vegetables),
    food("15", "Tomatoes", 18.0, 0.9, 3.9, 0.2, Vegetables),
    food("16", "Avocado", 160.0, 2.0, 9.0, 15.0, Fats),
    food("17", "Olive Oil", 884.0, 0.0, 0.0, 100.0, Fats),
    food("18", "Almonds", 579.0, 21.0, 22.0, 50.0, Fats),
    food("19", "Peanut Butter", 588.0, 25.0, 20.0, 50.0, Fats),
    food("20", "Coconut Oil", 862.0, 0.0, 0.0, 100.0, Fats),
];

/// Look up a catalogue entry by id.
pub fn find(id: &str) -> Option<&'static FoodItem> {
    FOODS.iter().find(|f| f.id == id)
}

/// Entries whose name contains `query` (case-insensitive), optionally
/// restricted to one category. An empty query matches everything.
pub fn search(query: &str, category: Option<FoodCategory>) -> Vec<&'static FoodItem> {
    let query = query.trim().to_lowercase();
    FOODS
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&query))
        .filter(|f| category.map_or(true, |c| f.category == c))
        .collect()
}

impl FoodItem {
    pub fn per_100g(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Nutrition for `grams`, rounded for the log.
    pub fn portion(&self, grams: f64) -> Nutrition {
        scale::scale_ingredient(self.per_100g(), 100.0, grams)
    }

    /// A one-serving custom meal named `"<food> (<grams>g)"`.
    pub fn quick_add(&self, grams: f64, timestamp: Timestamp) -> Meal {
        let grams = scale::quantity_or_zero(grams);
        Meal::custom(
            format!("{} ({}g)", self.name, grams),
            self.portion(grams),
            timestamp,
        )
    }
}

//! Edge case tests for nutrilog-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use nutrilog_engine::food::{self, FoodCategory};
use nutrilog_engine::scale::{logged_amount, parse_quantity, per_serving, scale_ingredient};
use nutrilog_engine::{
    DailyLog, DataSnapshot, FixedClock, GoalProgress, Ingredient, MemoryStorage, Meal, MealKind,
    Nutrition, NutritionStore, ProgressBand, SavedRecipe, UserSettings,
};
use std::sync::Arc;

fn create_test_store() -> (NutritionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(FixedClock::at("2024-06-01", 1_717_200_000_000));
    (NutritionStore::new(storage.clone(), clock), storage)
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[tokio::test]
async fn empty_meal_name() {
    let (store, _) = create_test_store();
    let log = store
        .add_meal(Meal::custom("", Nutrition::new(10.0, 0.0, 0.0, 0.0), 0))
        .await
        .unwrap();
    assert_eq!(log.meals()[0].name, "");
}

#[tokio::test]
async fn unicode_meal_names() {
    let (store, _) = create_test_store();

    let names = vec![
        "味噌汁",
        "Борщ",
        "شاورما",
        "🍕🍔🌮",
        "Crème brûlée",
        "Line\nBreak\tTab",
        "Quote \"and\" backslash \\",
    ];

    for name in &names {
        store
            .add_meal(Meal::custom(*name, Nutrition::new(100.0, 1.0, 1.0, 1.0), 0))
            .await
            .unwrap();
    }

    let log = store.today_log().await;
    let stored: Vec<_> = log.meals().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(stored, names);
}

#[tokio::test]
async fn very_long_recipe_name() {
    let (store, _) = create_test_store();
    let name = "x".repeat(100_000);

    store
        .save_recipe(SavedRecipe::new(name.clone(), Nutrition::ZERO, 0))
        .await
        .unwrap();
    assert_eq!(store.get_recipes().await[0].name.len(), name.len());
}

// ============================================================================
// Numeric Edge Cases
// ============================================================================

#[test]
fn huge_quantities_stay_finite() {
    let label = Nutrition::new(900.0, 0.0, 0.0, 100.0);
    let scaled = scale_ingredient(label, 100.0, 1e9);
    assert!(scaled.calories.is_finite());
    assert_eq!(scaled.calories, 9e9);
}

#[test]
fn tiny_label_weight() {
    let scaled = scale_ingredient(Nutrition::new(1.0, 0.1, 0.0, 0.0), 1e-3, 1.0);
    assert_eq!(scaled.calories, 1000.0);
    assert_eq!(scaled.protein, 100.0);
}

#[test]
fn infinite_inputs_are_neutralised() {
    let label = Nutrition::new(200.0, 10.0, 10.0, 10.0);
    assert!(scale_ingredient(label, 100.0, f64::INFINITY).is_zero());
    assert_eq!(
        scale_ingredient(label, f64::INFINITY, 100.0),
        scale_ingredient(label, 1.0, 100.0)
    );
    assert_eq!(per_serving(label, f64::NEG_INFINITY), label);
}

#[test]
fn negative_label_values_clamp_to_zero() {
    let label = Nutrition::new(-200.0, 10.0, -5.0, 2.0);
    let scaled = scale_ingredient(label, 100.0, 100.0);
    assert_eq!(scaled, Nutrition::new(0.0, 10.0, 0.0, 2.0));
}

#[test]
fn fractional_servings() {
    let serving = per_serving(Nutrition::new(900.0, 45.0, 90.0, 30.0), 6.0);
    assert_eq!(
        logged_amount(serving, 0.5),
        Nutrition::new(75.0, 3.8, 7.5, 2.5)
    );
}

#[test]
fn parse_quantity_odd_inputs() {
    assert_eq!(parse_quantity("+3"), 3.0);
    assert_eq!(parse_quantity("1.2.3"), 1.2);
    assert_eq!(parse_quantity("NaN"), 0.0);
    assert_eq!(parse_quantity("inf"), 0.0);
    assert_eq!(parse_quantity("０"), 0.0);
}

#[test]
fn rounding_boundaries() {
    // 0.25 is exact in binary and rounds away from zero
    let meal = Meal::custom("m", Nutrition::new(0.5, 0.25, 0.05, 0.0), 0);
    assert_eq!(meal.calories, 1.0);
    assert_eq!(meal.protein, 0.3);
}

// ============================================================================
// Daily Log Edge Cases
// ============================================================================

#[tokio::test]
async fn many_meals_in_one_day() {
    let (store, _) = create_test_store();
    for i in 0..200 {
        store
            .add_meal(Meal::custom(format!("snack {}", i), Nutrition::new(10.0, 0.1, 0.2, 0.3), 0))
            .await
            .unwrap();
    }

    let log = store.today_log().await;
    assert_eq!(log.len(), 200);
    assert_eq!(log.total_calories(), 2000.0);
    assert_eq!(log.total_protein(), 20.0);
    assert_eq!(log.total_carbs(), 40.0);
    assert_eq!(log.total_fat(), 60.0);
}

#[tokio::test]
async fn duplicate_meal_ids_remove_first_only() {
    let (store, _) = create_test_store();
    for calories in [100.0, 200.0] {
        store
            .add_meal(Meal::custom("dup", Nutrition::new(calories, 0.0, 0.0, 0.0), 0).with_id("same"))
            .await
            .unwrap();
    }

    let log = store.remove_meal(store.today(), "same").await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log.total_calories(), 200.0);
}

#[tokio::test]
async fn stored_log_with_missing_fields_is_recovered() {
    let (store, storage) = create_test_store();
    storage.insert_raw("daily_log_2024-06-01", r#"{"date":"2024-06-01"}"#);

    let loaded = store.load_log(store.today()).await;
    assert!(loaded.is_recovered());
    assert!(loaded.value().is_empty());
}

#[tokio::test]
async fn stored_totals_are_ignored() {
    let (store, storage) = create_test_store();
    storage.insert_raw(
        "daily_log_2024-06-01",
        r#"{
            "date": "2024-06-01",
            "meals": [
                {"id":"a","name":"A","calories":120,"protein":3,"carbs":20,"fat":2,
                 "servings":1,"timestamp":0,"type":"custom"}
            ],
            "totalCalories": 5,
            "totalProtein": 5,
            "totalCarbs": 5,
            "totalFat": 5
        }"#,
    );

    let log = store.today_log().await;
    assert_eq!(log.totals(), Nutrition::new(120.0, 3.0, 20.0, 2.0));
}

#[test]
fn empty_log_serialization() {
    let log = DailyLog::empty(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let json = serde_json::to_value(&log).unwrap();
    assert_eq!(json["meals"], serde_json::json!([]));
    assert_eq!(json["totalCalories"], 0.0);
}

// ============================================================================
// Recipe Edge Cases
// ============================================================================

#[test]
fn recipe_without_ingredients_serializes_without_field() {
    let recipe = SavedRecipe::new("Plain", Nutrition::new(100.0, 1.0, 1.0, 1.0), 0);
    let json = serde_json::to_value(&recipe).unwrap();
    assert!(json.get("ingredients").is_none());
}

#[test]
fn recipe_from_ingredients_keeps_them() {
    let ingredients = vec![
        Ingredient::from_label("Lentils", Nutrition::new(116.0, 9.0, 20.0, 0.4), 100.0, 300.0, "g"),
        Ingredient::from_label("Stock", Nutrition::new(5.0, 0.5, 0.3, 0.1), 100.0, 500.0, "ml"),
    ];
    let recipe = SavedRecipe::from_ingredients("Dal", ingredients, 0);
    assert_eq!(recipe.ingredients.as_ref().map(Vec::len), Some(2));
    assert_eq!(recipe.calories, 373.0);
}

#[tokio::test]
async fn prepped_portion_naming() {
    let per = per_serving(Nutrition::new(1200.0, 90.0, 100.0, 40.0), 6.0);
    let one = Meal::prepped_portion("Lasagna", per, 1.0, 0);
    let two = Meal::prepped_portion("Lasagna", per, 2.0, 0);
    assert_eq!(one.name, "Lasagna (1 serving)");
    assert_eq!(two.name, "Lasagna (2 servings)");
    assert_eq!(two.kind, MealKind::Prepped);
    assert_eq!(two.calories, 400.0);
}

// ============================================================================
// Settings Edge Cases
// ============================================================================

#[test]
fn goal_validation_boundaries() {
    assert!(UserSettings::new(500).validate().is_ok());
    assert!(UserSettings::new(5000).validate().is_ok());
    assert!(UserSettings::new(499).validate().is_err());
    assert!(UserSettings::new(5001).validate().is_err());
}

#[test]
fn settings_with_unknown_fields_decode() {
    let settings: UserSettings =
        serde_json::from_str(r#"{"dailyCalorieGoal": 1800, "theme": "dark"}"#).unwrap();
    assert_eq!(settings.daily_calorie_goal, 1800);

    let empty: UserSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.daily_calorie_goal, 2000);
}

#[test]
fn progress_over_goal() {
    let progress = GoalProgress::compute(2600.0, 2000);
    assert_eq!(progress.remaining, -600.0);
    assert_eq!(progress.percent, 100.0);
    assert_eq!(progress.band, ProgressBand::High);
}

#[test]
fn progress_with_zero_goal() {
    let progress = GoalProgress::compute(100.0, 0);
    assert!(progress.percent.is_finite());
}

// ============================================================================
// Food Catalogue Edge Cases
// ============================================================================

#[test]
fn search_is_case_insensitive_and_trims() {
    let hits = food::search("  CHICKEN ", None);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|f| f.name.to_lowercase().contains("chicken")));
}

#[test]
fn search_with_category_and_empty_query() {
    let fats = food::search("", Some(FoodCategory::Fats));
    assert!(!fats.is_empty());
    assert!(fats.iter().all(|f| f.category == FoodCategory::Fats));
    assert!(food::search("zzz-no-such-food", None).is_empty());
}

#[test]
fn zero_gram_portion_is_zero() {
    let item = food::FOODS.first().unwrap();
    assert!(item.portion(0.0).is_zero());
}

// ============================================================================
// Snapshot Edge Cases
// ============================================================================

#[tokio::test]
async fn snapshot_of_empty_store() {
    let (store, _) = create_test_store();
    let snapshot = store.export_snapshot().await.unwrap();

    assert!(snapshot.logs.is_empty());
    assert!(snapshot.recipes.is_empty());
    assert!(snapshot.history.is_empty());
    assert_eq!(snapshot.settings, UserSettings::default());
}

#[tokio::test]
async fn import_keeps_unmentioned_logs() {
    let (store, storage) = create_test_store();
    store
        .add_meal(Meal::custom("Kept", Nutrition::new(50.0, 0.0, 0.0, 0.0), 0))
        .await
        .unwrap();

    store.import_snapshot(&DataSnapshot::new(0)).await.unwrap();
    assert!(storage.contains_key("daily_log_2024-06-01"));
    assert_eq!(store.today_log().await.len(), 1);
}

#[test]
fn snapshot_from_garbage_json() {
    assert!(DataSnapshot::from_json("not json").is_err());
    assert!(DataSnapshot::from_json("{}").is_err());
}

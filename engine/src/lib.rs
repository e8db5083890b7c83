//! # Nutrilog Engine
//!
//! Daily nutrition log aggregation and persistence for a single local user.
//!
//! Users log meals (ad-hoc foods or portions of batch recipes), follow the
//! day's calorie and macro totals against a goal, and vault finished days
//! into an append-only history.
//!
//! ## Design Principles
//!
//! - **Injected collaborators**: storage and time come in through
//!   [`KeyValueStorage`] and [`Clock`]; there is no global instance
//! - **Totals are derived**: a [`DailyLog`]'s totals are recomputed from its
//!   meals on every change and every load
//! - **Reads degrade, writes fail**: unreadable data falls back to defaults
//!   (observable through [`Loaded`]); failed writes return [`Error`]
//!
//! ## Core Concepts
//!
//! ### Quantity scaling
//!
//! The [`scale`] module turns label nutrition into realized nutrition and
//! batch totals into per-serving and logged amounts:
//! - [`scale::scale_ingredient`] - label values per reference weight, scaled to grams used
//! - [`scale::sum_ingredients`] - batch totals from scaled ingredients
//! - [`scale::per_serving`] / [`scale::logged_amount`] - batch to plate
//!
//! ### Store
//!
//! [`NutritionStore`] owns four record families in one key-value backend:
//! daily logs, saved recipes, history entries and user settings.
//!
//! ## Quick Start
//!
//! ```rust
//! use nutrilog_engine::{FixedClock, MemoryStorage, Meal, Nutrition, NutritionStore};
//! use std::sync::Arc;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let clock = Arc::new(FixedClock::at("2024-03-05", 1_709_600_000_000));
//! let store = NutritionStore::new(Arc::new(MemoryStorage::new()), clock);
//!
//! let oats = Meal::custom("Oats (80g)", Nutrition::new(311.2, 13.5, 52.8, 5.5), store.now_millis());
//! let log = store.add_meal(oats).await.unwrap();
//! assert_eq!(log.total_calories(), 311.0);
//!
//! let entry = store.vault_and_reset().await.unwrap().unwrap();
//! assert_eq!(entry.total_calories, 311.0);
//! assert!(store.today_log().await.is_empty());
//! # });
//! ```

pub mod clock;
pub mod error;
pub mod food;
pub mod history;
pub mod log;
pub mod meal;
pub mod nutrition;
pub mod recipe;
pub mod scale;
pub mod settings;
pub mod snapshot;
pub mod storage;
pub mod store;

// Re-export main types at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, StorageError};
pub use food::{FoodCategory, FoodItem};
pub use history::HistoryEntry;
pub use log::DailyLog;
pub use meal::{Meal, MealKind};
pub use nutrition::Nutrition;
pub use recipe::{Ingredient, SavedRecipe};
pub use settings::{GoalProgress, ProgressBand, SettingsError, UserSettings};
pub use snapshot::{DataSnapshot, SnapshotSummary, SNAPSHOT_FORMAT_VERSION};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{Loaded, NutritionStore};

/// Type aliases for clarity
pub type MealId = String;
pub type RecipeId = String;
pub type Timestamp = u64;
/// Calendar date identifying a daily log, serialized as `YYYY-MM-DD`.
pub type LogDate = chrono::NaiveDate;

//! Tests for the file-backed storage, on its own and under the store.

use nutrilog_engine::storage::KeyValueStorage;
use nutrilog_engine::{FixedClock, Meal, Nutrition, NutritionStore, StorageError, UserSettings};
use nutrilog_server::storage::FileStorage;
use std::sync::Arc;

async fn open_temp() -> (tempfile::TempDir, FileStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path().join("data")).await.unwrap();
    (dir, storage)
}

#[tokio::test]
async fn set_get_remove() {
    let (_dir, storage) = open_temp().await;

    assert_eq!(storage.get("user_settings").await.unwrap(), None);
    storage
        .set("user_settings", r#"{"dailyCalorieGoal":1800}"#.to_string())
        .await
        .unwrap();
    assert_eq!(
        storage.get("user_settings").await.unwrap().as_deref(),
        Some(r#"{"dailyCalorieGoal":1800}"#)
    );

    storage.set("user_settings", "{}".to_string()).await.unwrap();
    assert_eq!(storage.get("user_settings").await.unwrap().as_deref(), Some("{}"));

    storage.remove("user_settings").await.unwrap();
    assert_eq!(storage.get("user_settings").await.unwrap(), None);
    storage.remove("user_settings").await.unwrap();
}

#[tokio::test]
async fn list_keys_sorted_and_ignores_stray_files() {
    let (_dir, storage) = open_temp().await;
    for key in ["saved_recipes", "daily_log_2024-03-06", "daily_log_2024-03-05"] {
        storage.set(key, "[]".to_string()).await.unwrap();
    }
    std::fs::write(storage.root().join("notes.txt"), "hello").unwrap();
    std::fs::write(storage.root().join(".half.tmp"), "partial").unwrap();

    assert_eq!(
        storage.list_keys().await.unwrap(),
        vec!["daily_log_2024-03-05", "daily_log_2024-03-06", "saved_recipes"]
    );
}

#[tokio::test]
async fn no_temp_files_left_behind() {
    let (_dir, storage) = open_temp().await;
    storage.set("history_entries", "[]".to_string()).await.unwrap();

    let names: Vec<_> = std::fs::read_dir(storage.root())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["history_entries.json"]);
}

#[tokio::test]
async fn clear_removes_only_keys() {
    let (_dir, storage) = open_temp().await;
    storage.set("a", "1".to_string()).await.unwrap();
    storage.set("b", "2".to_string()).await.unwrap();
    std::fs::write(storage.root().join("README"), "keep").unwrap();

    storage.clear().await.unwrap();
    assert!(storage.list_keys().await.unwrap().is_empty());
    assert!(storage.root().join("README").exists());
}

#[tokio::test]
async fn invalid_keys_are_rejected() {
    let (_dir, storage) = open_temp().await;
    for key in ["../outside", "a/b", "", "with space"] {
        assert!(matches!(
            storage.set(key, "x".to_string()).await,
            Err(StorageError::Io(_))
        ));
        assert!(storage.get(key).await.is_err());
    }
}

#[tokio::test]
async fn store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(FixedClock::at("2024-03-05", 1_709_600_000_000));

    {
        let storage = FileStorage::open(dir.path()).await.unwrap();
        let store = NutritionStore::new(Arc::new(storage), clock.clone());
        store
            .add_meal(Meal::custom("Rice", Nutrition::new(200.0, 4.0, 44.0, 0.4), 0))
            .await
            .unwrap();
        store.save_settings(&UserSettings::new(1900)).await.unwrap();
    }

    let storage = FileStorage::open(dir.path()).await.unwrap();
    let store = NutritionStore::new(Arc::new(storage), clock);
    let log = store.today_log().await;
    assert_eq!(log.len(), 1);
    assert_eq!(log.total_calories(), 200.0);
    assert_eq!(store.get_settings().await.daily_calorie_goal, 1900);

    store.vault_and_reset().await.unwrap();
    assert!(!dir.path().join("daily_log_2024-03-05.json").exists());
    assert!(dir.path().join("history_entries.json").exists());
}

#[tokio::test]
async fn corrupt_file_degrades_to_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("user_settings.json"), "{{{").unwrap();

    let storage = FileStorage::open(dir.path()).await.unwrap();
    let store = NutritionStore::new(
        Arc::new(storage),
        Arc::new(FixedClock::at("2024-03-05", 0)),
    );
    let loaded = store.load_settings().await;
    assert!(loaded.is_recovered());
    assert_eq!(loaded.into_value(), UserSettings::default());
}
